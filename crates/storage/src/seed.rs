//! Sample catalog data, inserted behind `Database::ensure_seeded`.
//!
//! Tables are created if missing and left alone when they already hold
//! rows, so re-running a process against an existing database file never
//! duplicates data.

use chrono::{Duration, Utc};
use sqlx::SqlitePool;

use crate::error::Result;

const ROWS_PER_TABLE: i64 = 100;
const MEETINGS: i64 = 10;

const RACE_NAMES: &[&str] = &[
    "Flemington Stakes",
    "Caulfield Cup Trial",
    "Randwick Sprint",
    "Rosehill Guineas Heat",
    "Moonee Valley Dash",
    "Doomben Classic",
    "Morphettville Mile",
    "Ascot Plate",
];

const VENUES: &[&str] = &[
    "Madison Square Garden",
    "Wembley Stadium",
    "Old Trafford",
    "Staples Center",
    "Yankee Stadium",
    "Centre Court Wimbledon",
    "Camp Nou",
    "Emirates Stadium",
];

// One team pool per sport id (1..=5): football, basketball, tennis, soccer,
// baseball.
const TEAMS: &[&[&str]] = &[
    &["Patriots", "Cowboys", "Packers", "Steelers", "49ers", "Giants", "Eagles", "Chiefs"],
    &["Lakers", "Celtics", "Warriors", "Bulls", "Heat", "Knicks", "Nets", "Spurs"],
    &["Djokovic", "Nadal", "Federer", "Murray", "Tsitsipas", "Medvedev", "Zverev", "Thiem"],
    &["Manchester United", "Liverpool", "Arsenal", "Chelsea", "Barcelona", "Real Madrid", "Bayern Munich", "PSG"],
    &["Yankees", "Red Sox", "Dodgers", "Giants", "Cubs", "Cardinals", "Astros", "Braves"],
];

pub(crate) async fn run(pool: &SqlitePool) -> Result<()> {
    seed_races(pool).await?;
    seed_events(pool).await?;

    Ok(())
}

/// Spreads start times from roughly an hour in the past to a day ahead, so
/// both OPEN and CLOSED records exist right after seeding.
fn start_offset_minutes(i: i64) -> i64 {
    (i * 37) % 1500 - 60
}

async fn seed_races(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS races (
            id INTEGER PRIMARY KEY,
            meeting_id INTEGER,
            name TEXT,
            number INTEGER,
            visible INTEGER,
            advertised_start_time DATETIME
        )",
    )
    .execute(pool)
    .await?;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM races")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    let now = Utc::now();
    for i in 1..=ROWS_PER_TABLE {
        let name = RACE_NAMES[(i as usize - 1) % RACE_NAMES.len()];
        let start = now + Duration::minutes(start_offset_minutes(i));

        sqlx::query(
            "INSERT INTO races (id, meeting_id, name, number, visible, advertised_start_time)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(i)
        .bind((i - 1) % MEETINGS + 1)
        .bind(name)
        .bind((i - 1) % 12 + 1)
        .bind(i % 3 != 0)
        .bind(start.naive_utc())
        .execute(pool)
        .await?;
    }

    Ok(())
}

async fn seed_events(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS events (
            id INTEGER PRIMARY KEY,
            sport_id INTEGER,
            name TEXT,
            venue TEXT,
            visible INTEGER,
            advertised_start_time DATETIME,
            home_team TEXT,
            away_team TEXT
        )",
    )
    .execute(pool)
    .await?;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    let now = Utc::now();
    for i in 1..=ROWS_PER_TABLE {
        let sport_id = (i - 1) % TEAMS.len() as i64 + 1;
        let teams = TEAMS[sport_id as usize - 1];

        // Offsets differ by 3 against a pool of 8, so the sides never match.
        let home_team = teams[i as usize % teams.len()];
        let away_team = teams[(i as usize + 3) % teams.len()];

        let venue = VENUES[(i as usize - 1) % VENUES.len()];
        let start = now + Duration::minutes(start_offset_minutes(i + 11));

        sqlx::query(
            "INSERT INTO events (id, sport_id, name, venue, visible, advertised_start_time,
                                 home_team, away_team)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(i)
        .bind(sport_id)
        .bind(format!("{home_team} vs {away_team}"))
        .bind(venue)
        .bind(i % 4 != 0)
        .bind(start.naive_utc())
        .bind(home_team)
        .bind(away_team)
        .execute(pool)
        .await?;
    }

    Ok(())
}
