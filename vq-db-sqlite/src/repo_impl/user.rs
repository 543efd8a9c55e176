use super::*;

impl<'a> UserRepo for DbConnection<'a> {
    fn create_user(&self, user: &User) -> Result<()> {
        create_user(self.conn.borrow_mut().sqlite(), user)
    }
    fn get_user(&self, id: &Id) -> Result<User> {
        get_user(self.conn.borrow_mut().sqlite(), id)
    }
    fn get_user_by_email(&self, email: &str) -> Result<User> {
        try_get_user_by_email(self.conn.borrow_mut().sqlite(), email)?
            .ok_or(repo::Error::NotFound)
    }
    fn try_get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        try_get_user_by_email(self.conn.borrow_mut().sqlite(), email)
    }
}

fn create_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    let new_user = models::NewUser {
        id: u.id.as_str(),
        email: &u.email,
        role: u.role.as_ref(),
    };
    diesel::insert_into(schema::users::table)
        .values(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_user(conn: &mut SqliteConnection, id: &Id) -> Result<User> {
    use schema::users::dsl;
    let entity = dsl::users
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?;
    user_from_entity(entity)
}

fn try_get_user_by_email(conn: &mut SqliteConnection, email: &str) -> Result<Option<User>> {
    use schema::users::dsl;
    dsl::users
        .filter(dsl::email.eq(email))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(user_from_entity)
        .transpose()
}

fn user_from_entity(entity: models::UserEntity) -> Result<User> {
    let models::UserEntity {
        rowid: _,
        id,
        email,
        role,
    } = entity;
    let role = Role::parse(&role)
        .map_err(|_| repo::Error::Other(anyhow!("Unexpected role in database: {role}")))?;
    Ok(User {
        id: id.into(),
        email,
        role,
    })
}
