//! End-to-end analysis of script files through the library entry point

use pretty_assertions::assert_eq;
use rust_sqlscan::analyzer::AnalyzerConfig;
use rust_sqlscan::{analyze_files, analyze_text, AnalyzeOptions};

use crate::common::TestContext;

const SCHEMA_SCRIPT: &str = r#"-- schema
CREATE TABLE `users` (
  `id` int(11) NOT NULL AUTO_INCREMENT,
  `email` varchar(255) NOT NULL DEFAULT '',
  PRIMARY KEY (`id`),
  UNIQUE KEY `uq_email` (`email`)
);

ALTER TABLE `users` ADD `name` varchar(64);
"#;

const QUERY_SCRIPT: &str = r#"SELECT u.email, o.total
FROM users u
LEFT JOIN (SELECT user_id, SUM(total) total FROM orders o2 GROUP BY user_id) o ON o.user_id = u.id
WHERE u.id > 10;
SELECT ';' FROM dual;
"#;

#[test]
fn test_analyze_schema_script() {
    let ctx = TestContext::new();
    ctx.write_script("schema.sql", SCHEMA_SCRIPT);

    let scripts = ctx.analyze(&[ctx.input("schema.sql")]);
    assert_eq!(scripts.len(), 1);

    let statements = &scripts[0].statements;
    assert_eq!(statements.len(), 2);

    let create = &statements[0];
    assert_eq!(create.start_line, 1);
    assert!(create.schema_altering);
    assert!(create.error.is_none());
    let table = create.table.as_ref().expect("CREATE TABLE should be decomposed");
    assert_eq!(table.name, "users");
    let names: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["id", "email"]);
    assert_eq!(table.columns[1].default_clause, "DEFAULT ''");
    assert_eq!(
        table.constraints,
        vec!["PRIMARY KEY (`id`)", "UNIQUE KEY `uq_email` (`email`)"]
    );

    let alter = &statements[1];
    assert_eq!(alter.index, 2);
    assert_eq!(alter.start_line, 9);
    assert!(alter.schema_altering);
    assert!(alter.table.is_none());
}

#[test]
fn test_analyze_query_script() {
    let ctx = TestContext::new();
    ctx.write_script("queries.sql", QUERY_SCRIPT);

    let scripts = ctx.analyze(&[ctx.input("queries.sql")]);
    let statements = &scripts[0].statements;
    assert_eq!(statements.len(), 2);

    let aliases: Vec<(&str, &str)> = statements[0]
        .aliases
        .iter()
        .map(|(a, t)| (a.as_str(), t.as_str()))
        .collect();
    assert_eq!(aliases, vec![("o2", "orders"), ("u", "users")]);
    assert!(!statements[0].schema_altering);

    assert_eq!(statements[1].start_line, 5);
    assert!(statements[1].aliases.is_empty());
}

#[test]
fn test_analyze_directory_in_sorted_order() {
    let ctx = TestContext::new();
    ctx.write_script("b/second.sql", "select * from b x;");
    ctx.write_script("a/first.sql", "select * from a y;");
    ctx.write_script("a/readme.md", "not a script");

    let scripts = ctx.analyze(&[ctx.root.to_string_lossy().into_owned()]);
    let files: Vec<String> = scripts
        .iter()
        .map(|s| {
            s.path
                .as_ref()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
        .collect();
    assert_eq!(files, vec!["first.sql", "second.sql"]);
}

#[test]
fn test_analyze_many_scripts_in_parallel() {
    let ctx = TestContext::new();
    for i in 0..20 {
        ctx.write_script(
            &format!("s{:02}.sql", i),
            format!("select * from t{} a{};", i, i),
        );
    }

    let scripts = ctx.analyze(&[ctx.input("*.sql")]);
    assert_eq!(scripts.len(), 20);
    for (i, script) in scripts.iter().enumerate() {
        let alias = format!("a{}", i);
        assert_eq!(
            script.statements[0].aliases.get(&alias).map(String::as_str),
            Some(format!("t{}", i).as_str())
        );
    }
}

#[test]
fn test_statement_errors_do_not_fail_the_script() {
    let ctx = TestContext::new();
    ctx.write_script("broken.sql", "select * from (select 1;\ncreate table (a int);\nselect 2");

    let scripts = ctx.analyze(&[ctx.input("broken.sql")]);
    let statements = &scripts[0].statements;
    assert_eq!(statements.len(), 3);
    assert!(statements[0].error.is_some());
    assert!(statements[1].error.is_some());
    assert!(statements[2].error.is_none());
}

#[test]
fn test_unterminated_literal_fails_analysis() {
    let ctx = TestContext::new();
    ctx.write_script("bad.sql", "select 'never closed");

    let options = AnalyzeOptions {
        inputs: vec![ctx.input("bad.sql")],
        ..Default::default()
    };
    let err = analyze_files(&options).unwrap_err();
    assert!(
        format!("{:#}", err).contains("Unterminated quoted literal"),
        "unexpected error: {:#}",
        err
    );
}

#[test]
fn test_analyze_text_has_no_path() {
    let script = analyze_text("select * from t x", &AnalyzerConfig::default()).unwrap();
    assert!(script.path.is_none());
    assert_eq!(script.statements.len(), 1);
    assert_eq!(script.statements[0].text, "select * from t x");
}
