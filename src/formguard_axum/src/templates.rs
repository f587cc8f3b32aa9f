//! HTML pages rendered by the login routes.

use askama::Template;

#[derive(Template)]
#[template(
    ext = "html",
    source = r#"<!DOCTYPE html>
<html>
<head><title>Log in</title></head>
<body>
  <h1>Log in</h1>
  {% if let Some(message) = error %}<p class="error">{{ message }}</p>{% endif %}
  <form action="{{ action }}" method="post">
    <label for="username">Username</label>
    <input type="text" id="username" name="_username" value="{{ last_username }}">
    <label for="password">Password</label>
    <input type="password" id="password" name="_password">
    <label><input type="checkbox" name="_condiciones" value="1"> I accept the terms</label>
    <button type="submit">Log in</button>
  </form>
</body>
</html>"#
)]
pub struct LoginPage<'a> {
    pub action: &'a str,
    pub last_username: &'a str,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(
    ext = "html",
    source = r#"<!DOCTYPE html>
<html>
<head><title>Admin</title></head>
<body>
  <h1>Welcome, {{ username }}!</h1>
  <form action="{{ logout }}" method="post">
    <button type="submit">Log out</button>
  </form>
</body>
</html>"#
)]
pub struct AdminPage<'a> {
    pub username: &'a str,
    pub logout: &'a str,
}
