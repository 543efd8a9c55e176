use crate::usecases::prelude::*;

pub fn authorize_user_by_email<R>(repo: &R, email: &str, min_required_role: Role) -> Result<User>
where
    R: UserRepo,
{
    let user = repo
        .try_get_user_by_email(email)?
        .ok_or(Error::Unauthorized)?;
    if user.role < min_required_role {
        return Err(Error::Forbidden);
    }
    Ok(user)
}

/// Business accounts may only act on resources of the business they
/// own; admins may act on any tenant.
pub fn authorize_business_owner<R>(repo: &R, email: &str, business_id: &Id) -> Result<User>
where
    R: UserRepo + BusinessRepo,
{
    let user = authorize_user_by_email(repo, email, Role::Business)?;
    if user.role >= Role::Admin {
        return Ok(user);
    }
    let business = repo.get_business(business_id)?;
    if business.owner_email != user.email {
        return Err(Error::Forbidden);
    }
    Ok(user)
}
