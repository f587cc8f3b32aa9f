mod helpers;
mod login;
mod logout;
