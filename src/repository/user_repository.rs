use rusqlite::{params, Connection, Row};

use crate::model::repository::User;

pub fn create_user(user: &User, con: &Connection) -> Result<User, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!("../assets/queries/user/create_user.sql"))
        .unwrap();
    let id = pst.insert(params![
        user.emp_id,
        user.name,
        user.department,
        user.designation,
        user.hod,
        user.supervisor,
        user.email,
        user.password_hash,
        user.password_salt,
    ])? as u32;
    Ok(User {
        id: Some(id),
        ..user.clone()
    })
}

/// the next free employee id. Racing callers can both see the same value, so
/// inserts must be retried on a unique constraint violation
pub fn next_emp_id(con: &Connection) -> Result<u32, rusqlite::Error> {
    con.query_row(
        include_str!("../assets/queries/user/next_emp_id.sql"),
        [],
        |row| row.get(0),
    )
}

pub fn get_by_email(email: &str, con: &Connection) -> Result<User, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!("../assets/queries/user/get_user_by_email.sql"))
        .unwrap();
    pst.query_row([email], map_user)
}

pub fn get_by_emp_id(emp_id: u32, con: &Connection) -> Result<User, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/user/get_user_by_emp_id.sql"
        ))
        .unwrap();
    pst.query_row([emp_id], map_user)
}

pub fn get_all(con: &Connection) -> Result<Vec<User>, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!("../assets/queries/user/get_all_users.sql"))
        .unwrap();
    let mut users = Vec::new();
    let mut rows = pst.query([])?;
    while let Some(row) = rows.next()? {
        users.push(map_user(row)?);
    }
    Ok(users)
}

pub fn update_user(user: &User, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!("../assets/queries/user/update_user.sql"))
        .unwrap();
    pst.execute(params![
        user.emp_id,
        user.name,
        user.department,
        user.designation,
        user.hod,
        user.supervisor,
    ])?;
    Ok(())
}

pub fn delete_user(emp_id: u32, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!("../assets/queries/user/delete_user.sql"))
        .unwrap();
    pst.execute([emp_id])?;
    Ok(())
}

/// records a fresh login session for audit purposes
pub fn create_session(emp_id: u32, email: &str, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!("../assets/queries/user/create_session.sql"))
        .unwrap();
    pst.execute(params![emp_id, email])?;
    Ok(())
}

/// marks all open sessions for the employee as logged out
pub fn close_sessions(emp_id: u32, con: &Connection) -> Result<usize, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!("../assets/queries/user/close_sessions.sql"))
        .unwrap();
    pst.execute([emp_id])
}

fn map_user(row: &Row) -> Result<User, rusqlite::Error> {
    Ok(User {
        id: row.get(0)?,
        emp_id: row.get(1)?,
        name: row.get(2)?,
        department: row.get(3)?,
        designation: row.get(4)?,
        hod: row.get(5)?,
        supervisor: row.get(6)?,
        email: row.get(7)?,
        password_hash: row.get(8)?,
        password_salt: row.get(9)?,
    })
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use super::*;
    use crate::repository::open_connection;
    use crate::test::{cleanup, refresh_db};

    fn user(emp_id: u32, email: &str) -> User {
        User {
            id: None,
            emp_id,
            name: Some("Test User".to_string()),
            department: None,
            designation: None,
            hod: None,
            supervisor: None,
            email: email.to_string(),
            password_hash: "hash".to_string(),
            password_salt: "salt".to_string(),
        }
    }

    #[test]
    fn next_emp_id_starts_at_one_and_counts_up() {
        refresh_db();
        let con: Connection = open_connection();
        assert_eq!(1, next_emp_id(&con).unwrap());
        create_user(&user(1, "a@example.com"), &con).unwrap();
        create_user(&user(2, "b@example.com"), &con).unwrap();
        let next = next_emp_id(&con).unwrap();
        con.close().unwrap();
        assert_eq!(3, next);
        cleanup();
    }

    #[test]
    fn duplicate_emp_id_is_rejected() {
        refresh_db();
        let con: Connection = open_connection();
        create_user(&user(1, "a@example.com"), &con).unwrap();
        let res = create_user(&user(1, "b@example.com"), &con);
        con.close().unwrap();
        assert!(res.is_err());
        cleanup();
    }
}
