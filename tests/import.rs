use roster::{
    RosterError, Student, StudentsTable, Table,
    import::{import_students, read_students_csv},
};
use sqlx::{Connection, SqliteConnection};
use time::macros::date;

const CSV: &str = "id,first_name,last_name,birthday
1,Ada,Lovelace,1815-12-10
2,Grace,Hopper,
not-a-number,Bad,Row,2000-01-01
3,Bad,Date,10/12/1815
4,Charles,Babbage,1791-12-26
";

#[test]
fn csv_rows_parse_and_bad_rows_are_collected() {
    let (students, errors) = read_students_csv(CSV.as_bytes());

    assert_eq!(
        students,
        vec![
            Student::new(1, "Ada", "Lovelace", Some(date!(1815 - 12 - 10))),
            Student::new(2, "Grace", "Hopper", None),
            Student::new(4, "Charles", "Babbage", Some(date!(1791 - 12 - 26))),
        ]
    );
    assert_eq!(errors.len(), 2);
    assert!(matches!(errors[0], RosterError::Csv { .. }));
    assert!(matches!(errors[1], RosterError::ParseDate { ref original, .. } if original == "10/12/1815"));
}

#[tokio::test]
async fn import_counts_only_inserted_students() {
    let mut conn = SqliteConnection::connect("sqlite::memory:")
        .await
        .expect("unable to open in-memory sqlite");
    let mut table = StudentsTable::new(&mut conn);
    assert!(table.create_table().await);
    assert!(table.save(&Student::new(2, "Already", "Here", None)).await);

    let (students, _) = read_students_csv(CSV.as_bytes());
    assert_eq!(import_students(&mut table, &students).await, 2);
    assert_eq!(table.find_all().await.unwrap().len(), 3);
    assert_eq!(
        table.find_by_primary_key(2).await.unwrap(),
        Some(Student::new(2, "Already", "Here", None))
    );
}
