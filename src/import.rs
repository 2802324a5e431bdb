use crate::{
    data::{Table, student::Student},
    error::{ParseDateSnafu, RosterError, RosterResult},
};
use serde::Deserialize;
use snafu::ResultExt;
use std::io::Read;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

const BIRTHDAY_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Deserialize)]
struct CsvStudent {
    id: i32,
    first_name: String,
    last_name: String,
    birthday: Option<String>,
}

fn parse_birthday(birthday: Option<String>) -> RosterResult<Option<Date>> {
    match birthday {
        Some(original) if !original.trim().is_empty() => {
            Date::parse(original.trim(), BIRTHDAY_FORMAT)
                .context(ParseDateSnafu { original })
                .map(Some)
        }
        _ => Ok(None),
    }
}

/// Reads `id,first_name,last_name,birthday` rows, with a header line.
///
/// Rows that fail to parse are skipped and their errors returned alongside the good rows.
pub fn read_students_csv(reader: impl Read) -> (Vec<Student>, Vec<RosterError>) {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut students = vec![];
    let mut syntax_errors = vec![];

    for record in rdr.deserialize::<CsvStudent>() {
        let CsvStudent {
            id,
            first_name,
            last_name,
            birthday,
        } = match record {
            Ok(x) => x,
            Err(source) => {
                syntax_errors.push(RosterError::Csv { source });
                continue;
            }
        };

        let birthday = match parse_birthday(birthday) {
            Ok(x) => x,
            Err(e) => {
                syntax_errors.push(e);
                continue;
            }
        };

        students.push(Student {
            id,
            first_name,
            last_name,
            birthday,
        });
    }

    (students, syntax_errors)
}

/// Saves each student in turn, returning how many actually got inserted.
pub async fn import_students<T: Table<Entity = Student>>(
    table: &mut T,
    students: &[Student],
) -> usize {
    let mut inserted = 0;
    for student in students {
        if table.save(student).await {
            inserted += 1;
        } else {
            warn!(id = student.id, "Unable to import student");
        }
    }
    inserted
}
