use anyhow::{Result, anyhow};
use chrono::Local;
use itertools::Itertools;

use crate::planning::{Appointment, MonthGrid, YearMonth, build_month_grid};
use crate::store::{Collection, SqliteStore, load};

const WEEKDAYS: [&str; 7] = ["Lun", "Mar", "Mer", "Jeu", "Ven", "Sam", "Dim"];

// Appointments listed per day before collapsing into "+N"
const MAX_LISTED: usize = 3;

pub async fn run(year: Option<i32>, month: Option<i32>, db_path: &str) -> Result<()> {
    let today = Local::now().date_naive();
    let current = YearMonth::from_date(today);
    let year = year.unwrap_or(current.year());
    let month = month.map(|m| m - 1).unwrap_or(current.month() as i32);
    let month =
        YearMonth::normalize(year, month).ok_or_else(|| anyhow!("Year {} is out of range", year))?;

    let store = SqliteStore::open(db_path).await?;
    let appointments: Vec<Appointment> = load(&store, Collection::Rendezvous).await?;

    let grid = build_month_grid(month, &appointments, today);
    println!("{}", render_grid(&grid));
    println!("{}", render_agenda(&grid, MAX_LISTED));

    Ok(())
}

/// Calendar view, one row per week, days with appointments show the
/// count in brackets and today is starred.
pub fn render_grid(grid: &MonthGrid) -> String {
    let header = format!("{:04}-{:02}", grid.year, grid.month + 1);
    let weekdays = WEEKDAYS.iter().map(|d| format!("{:>6}", d)).join("");
    let weeks = grid
        .cells
        .iter()
        .chunks(7)
        .into_iter()
        .map(|week| {
            week.map(|cell| match cell.day {
                None => format!("{:>6}", ""),
                Some(day) => {
                    let marker = if cell.is_today { "*" } else { "" };
                    let count = match cell.appointments.len() {
                        0 => String::new(),
                        n => format!("[{}]", n),
                    };
                    format!("{:>6}", format!("{}{}{}", marker, day, count))
                }
            })
            .join("")
        })
        .join("\n");

    format!("{}\n{}\n{}", header, weekdays, weeks)
}

/// Day by day listing, truncated to `limit` entries per day
pub fn render_agenda(grid: &MonthGrid, limit: usize) -> String {
    grid.cells
        .iter()
        .filter(|cell| !cell.appointments.is_empty())
        .filter_map(|cell| {
            let day = cell.day?;
            let mut lines = vec![format!("{:02}:", day)];
            lines.extend(cell.appointments.iter().take(limit).map(|appt| {
                format!(
                    "  {}-{} {} {}",
                    appt.start_time,
                    appt.end_time,
                    appt.kind.label(),
                    appt.description
                )
                .trim_end()
                .to_string()
            }));
            let hidden = cell.appointments.len().saturating_sub(limit);
            if hidden > 0 {
                lines.push(format!("  +{} autres", hidden));
            }
            Some(lines.join("\n"))
        })
        .join("\n")
}
