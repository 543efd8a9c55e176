use super::*;

#[post("/login", format = "application/json", data = "<login>")]
pub fn post_login(
    db: sqlite::Connections,
    cookies: &CookieJar<'_>,
    login: JsonResult<json::LoginRequest>,
) -> Result<()> {
    let login = login?.into_inner();
    {
        let connection = db.shared()?;
        usecases::authorize_user_by_email(&connection.inner(), &login.email, Role::User).map_err(
            |err| {
                debug!("Login with email '{}' failed: {err}", login.email);
                err
            },
        )?;
    }
    cookies.add_private(
        Cookie::build((COOKIE_EMAIL_KEY, login.email)).same_site(rocket::http::SameSite::Lax),
    );
    Ok(Json(()))
}

#[post("/logout", format = "application/json")]
pub fn post_logout(cookies: &CookieJar<'_>) -> Json<()> {
    cookies.remove_private(Cookie::from(COOKIE_EMAIL_KEY));
    Json(())
}

#[get("/users/current/coins")]
pub fn get_current_user_coins(
    db: sqlite::Connections,
    account: Account,
) -> Result<json::CoinBalance> {
    let connection = db.shared()?;
    let user = usecases::authorize_user_by_email(&connection.inner(), account.email(), Role::User)?;
    let balance = usecases::coin_balance_of_user(&connection.inner(), &user.id)?;
    Ok(Json(json::CoinBalance { balance }))
}
