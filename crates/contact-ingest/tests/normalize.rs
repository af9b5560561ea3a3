use std::fs;

use contact_ingest::{CsvTable, IngestError, SourcesConfig, normalize, read_csv_table};
use contact_model::{NameColumns, SourceMapping};

fn mapping(id: &str) -> SourceMapping {
    SourceMapping::new(id).expect("valid source id")
}

#[test]
fn source_without_email_yields_no_records() {
    let table = CsvTable::from_rows(&["Name", "Phone"], vec![vec!["Jane Doe", "555"]]);
    let records = normalize(&table, &mapping("Personal Contacts")).expect("skip is not an error");
    assert!(records.is_empty());
}

#[test]
fn source_without_email_is_skipped_even_if_other_columns_are_missing() {
    let table = CsvTable::from_rows(&["Phone"], vec![vec!["555"]]);
    let source = mapping("contacts").with_full_name("Does Not Exist");
    assert!(normalize(&table, &source).unwrap().is_empty());
}

#[test]
fn missing_configured_column_is_an_error() {
    let table = CsvTable::from_rows(&["Email", "Name"], vec![vec!["x@y.com", "Jane"]]);
    let source = mapping("crm").with_email("Email").with_linkedin("LinkedIn");
    let err = normalize(&table, &source).unwrap_err();
    match err {
        IngestError::MissingColumn {
            source_id,
            column,
            available,
        } => {
            assert_eq!(source_id, "crm");
            assert_eq!(column, "LinkedIn");
            assert_eq!(available, vec!["Email", "Name"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn derives_identity_from_full_name() {
    let table = CsvTable::from_rows(
        &["Email ", "Name", "Profile"],
        vec![
            vec![" x@y.com ", " Jane Q Doe ", " https://www.linkedin.com/in/jdoe "],
            vec!["", "", ""],
        ],
    );
    let source = mapping("LinkedIn Connections")
        .with_email("Email")
        .with_full_name("Name")
        .with_linkedin("Profile");
    let records = normalize(&table, &source).unwrap();
    assert_eq!(records.len(), 2);

    let jane = &records[0].identity;
    assert_eq!(jane.email.as_deref(), Some("x@y.com"));
    assert_eq!(jane.first_name.as_deref(), Some("Jane"));
    assert_eq!(jane.last_name.as_deref(), Some("Doe"));
    assert_eq!(
        jane.linkedin.as_deref(),
        Some("https://www.linkedin.com/in/jdoe")
    );

    let blank = &records[1].identity;
    assert_eq!(blank.email, None);
    assert_eq!(blank.first_name, None);
    assert_eq!(blank.last_name, None);
    assert_eq!(blank.linkedin, None);
}

#[test]
fn derives_identity_from_split_names() {
    let table = CsvTable::from_rows(
        &["Email", "First", "Last"],
        vec![vec!["a@b.com", " Ada ", " Lovelace"]],
    );
    let mut source = mapping("crm").with_email("Email");
    source.name_columns = NameColumns::Split {
        first: Some("First".to_string()),
        last: None,
    };
    let records = normalize(&table, &source).unwrap();
    assert_eq!(records[0].identity.first_name.as_deref(), Some("Ada"));
    assert_eq!(records[0].identity.last_name, None);
}

#[test]
fn original_columns_are_prefixed_and_untouched() {
    let table = CsvTable::from_rows(&["Email", "Notes"], vec![vec!["x@y.com", " keep me "]]);
    let records = normalize(&table, &mapping("Waitlist Signup List").with_email("Email")).unwrap();
    let record = &records[0];

    assert_eq!(record.source_id, "Waitlist Signup List");
    assert_eq!(
        record.column_names().collect::<Vec<_>>(),
        vec!["waitlist_signup_list_Email", "waitlist_signup_list_Notes"]
    );
    assert_eq!(record.value("waitlist_signup_list_Notes"), Some(" keep me "));
}

#[test]
fn loads_config_and_reads_sources_from_disk() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(
        dir.path().join("crm.csv"),
        "CRM export\n\nEmail,First Name,Last Name\nx@y.com,Jane,Doe\n",
    )
    .expect("write crm");
    fs::write(
        dir.path().join("contacts.toml"),
        "[[source]]\npath = \"crm.csv\"\nheader_row = 1\nemail = \"Email\"\n\
         first_name = \"First Name\"\nlast_name = \"Last Name\"\n",
    )
    .expect("write config");

    let config = SourcesConfig::load(&dir.path().join("contacts.toml")).expect("load config");
    let source = &config.sources[0];
    assert_eq!(source.path, dir.path().join("crm.csv"));

    let mapping = source.mapping().expect("mapping");
    let table = read_csv_table(&source.path, mapping.header_row).expect("read table");
    let records = normalize(&table, &mapping).expect("normalize");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].value("crm_First Name"), Some("Jane"));
    assert_eq!(records[0].identity.last_name.as_deref(), Some("Doe"));
}
