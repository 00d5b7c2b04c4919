use rusqlite::{params, Connection, Row};

use crate::model::repository::TankImage;

pub fn create_image(image: &TankImage, con: &Connection) -> Result<TankImage, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!("../assets/queries/image/create_image.sql"))
        .unwrap();
    let id = pst.insert(params![
        image.emp_id,
        image.tank_number,
        image.image_type,
        image.image_path,
        image.created_date,
    ])? as u32;
    Ok(TankImage {
        id: Some(id),
        ..image.clone()
    })
}

/// looks up the row for (tank, type, day); at most one can exist
pub fn get_by_daily_key(
    tank_number: &str,
    image_type: &str,
    created_date: &str,
    con: &Connection,
) -> Result<Option<TankImage>, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/image/get_image_by_daily_key.sql"
        ))
        .unwrap();
    match pst.query_row(params![tank_number, image_type, created_date], map_image) {
        Ok(image) => Ok(Some(image)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

/// replaces the stored path on an existing daily row
pub fn update_image_path(
    id: u32,
    image_path: &str,
    emp_id: Option<u32>,
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/image/update_image_path.sql"
        ))
        .unwrap();
    pst.execute(params![id, image_path, emp_id])?;
    Ok(())
}

pub fn get_by_tank(tank_number: &str, con: &Connection) -> Result<Vec<TankImage>, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/image/get_images_by_tank.sql"
        ))
        .unwrap();
    let images = collect(pst.query([tank_number])?);
    images
}

pub fn get_by_tank_and_type(
    tank_number: &str,
    image_type: &str,
    con: &Connection,
) -> Result<Vec<TankImage>, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/image/get_images_by_tank_and_type.sql"
        ))
        .unwrap();
    let images = collect(pst.query(params![tank_number, image_type])?);
    images
}

/// newest-first image rows for the report compositor
pub fn get_for_report(
    tank_number: &str,
    con: &Connection,
) -> Result<Vec<TankImage>, rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!(
            "../assets/queries/image/get_images_for_report.sql"
        ))
        .unwrap();
    let images = collect(pst.query([tank_number])?);
    images
}

pub fn delete_image(id: u32, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con
        .prepare(include_str!("../assets/queries/image/delete_image.sql"))
        .unwrap();
    pst.execute([id])?;
    Ok(())
}

fn collect(mut rows: rusqlite::Rows) -> Result<Vec<TankImage>, rusqlite::Error> {
    let mut images = Vec::new();
    while let Some(row) = rows.next()? {
        images.push(map_image(row)?);
    }
    Ok(images)
}

fn map_image(row: &Row) -> Result<TankImage, rusqlite::Error> {
    Ok(TankImage {
        id: row.get(0)?,
        emp_id: row.get(1)?,
        tank_number: row.get(2)?,
        image_type: row.get(3)?,
        image_path: row.get(4)?,
        created_date: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use super::*;
    use crate::model::repository::Tank;
    use crate::repository::{open_connection, tank_repository};
    use crate::test::{cleanup, refresh_db};

    fn seed_tank(con: &Connection) {
        tank_repository::create_tank(
            &Tank {
                id: None,
                tank_number: "TANK-1".to_string(),
                status: None,
                created_by: None,
                updated_by: None,
            },
            con,
        )
        .unwrap();
    }

    #[test]
    fn daily_key_lookup_distinguishes_days() {
        refresh_db();
        let con: Connection = open_connection();
        seed_tank(&con);
        create_image(
            &TankImage {
                id: None,
                emp_id: None,
                tank_number: "TANK-1".to_string(),
                image_type: "front_view".to_string(),
                image_path: "TANK-1/front_view/TANK-1_front_view.jpg".to_string(),
                created_date: "2026-08-30".to_string(),
                created_at: None,
                updated_at: None,
            },
            &con,
        )
        .unwrap();
        let same_day = get_by_daily_key("TANK-1", "front_view", "2026-08-30", &con).unwrap();
        let other_day = get_by_daily_key("TANK-1", "front_view", "2026-08-31", &con).unwrap();
        con.close().unwrap();
        assert!(same_day.is_some());
        assert!(other_day.is_none());
        cleanup();
    }

    #[test]
    fn deleting_tank_cascades_to_images() {
        refresh_db();
        let con: Connection = open_connection();
        seed_tank(&con);
        create_image(
            &TankImage {
                id: None,
                emp_id: None,
                tank_number: "TANK-1".to_string(),
                image_type: "rear_view".to_string(),
                image_path: "TANK-1/rear_view/TANK-1_rear_view.jpg".to_string(),
                created_date: "2026-08-30".to_string(),
                created_at: None,
                updated_at: None,
            },
            &con,
        )
        .unwrap();
        let tank = tank_repository::get_by_number("TANK-1", &con).unwrap();
        tank_repository::delete_tank(tank.id.unwrap(), &con).unwrap();
        let images = get_by_tank("TANK-1", &con).unwrap();
        con.close().unwrap();
        assert!(images.is_empty());
        cleanup();
    }
}
