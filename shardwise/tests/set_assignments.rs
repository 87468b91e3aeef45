use std::io::Write;
use std::sync::Arc;
use std::thread;

use shardwise::config::Config;
use shardwise::frontend::router::parser::{
    ColumnSegment, ExpressionSegment, GeneratedKeySource, Scalar, SqlExpression, SqlToken,
};
use shardwise::{
    Error, InsertStatement, Schema, SegmentFiller, SetAssignmentsFiller, SetAssignmentsSegment,
    ShardingRules,
};

static CONFIG: &str = r#"
[[sharded_tables]]
name = "user"
column = "name"
generate_key_column = "id"

[[sharded_tables]]
column = "tenant_id"

[[encrypted_tables]]
name = "account"

[[encrypted_tables.columns]]
name = "pwd"
cipher_column = "pwd_cipher"
assisted_query_column = "pwd_assisted"

[[tables]]
name = "orders"
columns = ["id", "tenant_id"]
"#;

fn collaborators() -> (ShardingRules, Schema) {
    let config = Config::from_toml(CONFIG).unwrap();
    (ShardingRules::from(&config), Schema::from(&config))
}

#[test]
fn test_set_assignments_from_config() {
    shardwise::logger::init();

    let (rules, schema) = collaborators();
    let sql = "INSERT INTO user SET id = ?, name = 'bob', age = 30";
    let segment = SetAssignmentsSegment::new(17)
        .assignment(
            ColumnSegment::new("id", 21),
            ExpressionSegment::placeholder(0, 26, 26),
        )
        .assignment(
            ColumnSegment::new("name", 29),
            ExpressionSegment::text(36, 40),
        )
        .assignment(
            ColumnSegment::new("age", 43),
            ExpressionSegment::literal(30, 49, 50),
        );

    let mut statement = InsertStatement::new("user");
    SetAssignmentsFiller
        .fill(&segment, &mut statement, sql, &rules, &schema)
        .unwrap();

    let values = statement.insert_values()[0].values();
    assert_eq!(
        values,
        &[
            SqlExpression::Placeholder(0),
            SqlExpression::Text("'bob'".into()),
            SqlExpression::Literal(Scalar::Integer(30)),
        ]
    );

    let conditions = &statement.route_conditions().and_conditions[0].conditions;
    assert_eq!(conditions.len(), 1);
    assert_eq!(conditions[0].column.name, "name");
    assert_eq!(conditions[0].expression.text_value().as_deref(), Some("bob"));

    let key = &statement.generated_key_conditions()[0];
    assert_eq!(key.column.name, "id");
    assert_eq!(key.source, GeneratedKeySource::Placeholder(0));

    assert!(matches!(statement.tokens(), [SqlToken::InsertValues(_)]));
}

#[test]
fn test_complex_expression_on_sharding_column() {
    let (rules, schema) = collaborators();
    let sql = "INSERT INTO user SET id = ?, name = CONCAT(a,b), age = 30";
    let segment = SetAssignmentsSegment::new(17)
        .assignment(
            ColumnSegment::new("id", 21),
            ExpressionSegment::placeholder(0, 26, 26),
        )
        .assignment(
            ColumnSegment::new("name", 29),
            ExpressionSegment::complex(36, 46),
        )
        .assignment(
            ColumnSegment::new("age", 49),
            ExpressionSegment::literal(30, 55, 56),
        );

    let mut statement = InsertStatement::new("user");
    let err = SetAssignmentsFiller
        .fill(&segment, &mut statement, sql, &rules, &schema)
        .unwrap_err();

    assert!(matches!(err, Error::UnsupportedShardingColumnExpression(ref column) if column == "name"));
    assert!(statement.route_conditions().and_conditions.is_empty());
    assert!(statement.insert_values().is_empty());
    assert!(statement.columns().is_empty());
}

#[test]
fn test_unnamed_sharded_table_and_catalog() {
    let (rules, schema) = collaborators();
    let sql = "INSERT INTO orders SET id = 'abc', tenant_id = 5";
    let segment = SetAssignmentsSegment::new(19)
        .assignment(
            ColumnSegment::new("id", 23),
            ExpressionSegment::text(28, 32),
        )
        .assignment(
            ColumnSegment::new("tenant_id", 35),
            ExpressionSegment::literal(5, 47, 47),
        );

    let mut statement = InsertStatement::new("orders");
    SetAssignmentsFiller
        .fill(&segment, &mut statement, sql, &rules, &schema)
        .unwrap();

    let conditions = &statement.route_conditions().and_conditions[0].conditions;
    assert_eq!(conditions.len(), 1);
    assert_eq!(conditions[0].column.name, "tenant_id");
    assert_eq!(
        conditions[0].expression,
        SqlExpression::Literal(Scalar::Integer(5))
    );

    // No generate key column configured for orders.
    assert!(statement.generated_key_conditions().is_empty());
}

#[test]
fn test_encrypted_table_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CONFIG.as_bytes()).unwrap();

    let config = shardwise::config::load(file.path()).unwrap();
    let rules = ShardingRules::from(config.as_ref());
    let schema = Schema::from(config.as_ref());

    // `pwd_assisted` is written by the encryption layer.
    let sql = "INSERT INTO account SET id = 1, pwd = ?, pwd_assisted";
    let segment = SetAssignmentsSegment::new(20)
        .assignment(
            ColumnSegment::new("id", 24),
            ExpressionSegment::literal(1, 29, 29),
        )
        .assignment(
            ColumnSegment::new("pwd", 32),
            ExpressionSegment::placeholder(0, 38, 38),
        )
        .column(ColumnSegment::new("pwd_assisted", 41));

    let mut statement = InsertStatement::new("account");
    SetAssignmentsFiller
        .fill(&segment, &mut statement, sql, &rules, &schema)
        .unwrap();

    assert_eq!(statement.columns().len(), 3);
    assert_eq!(statement.insert_values()[0].values().len(), 2);
    assert_eq!(statement.parameters_index(), 1);
}

#[test]
fn test_concurrent_fills() {
    let (rules, schema) = collaborators();
    let rules = Arc::new(rules);
    let schema = Arc::new(schema);

    let handles = (0..4)
        .map(|i| {
            let rules = rules.clone();
            let schema = schema.clone();

            thread::spawn(move || {
                let sql = format!("INSERT INTO user SET id = {}, name = ?", i);
                let segment = SetAssignmentsSegment::new(17)
                    .assignment(
                        ColumnSegment::new("id", 21),
                        ExpressionSegment::literal(i as i64, 26, 26),
                    )
                    .assignment(
                        ColumnSegment::new("name", 29),
                        ExpressionSegment::placeholder(0, 36, 36),
                    );

                let mut statement = InsertStatement::new("user");
                SetAssignmentsFiller
                    .fill(&segment, &mut statement, &sql, rules.as_ref(), schema.as_ref())
                    .unwrap();
                statement
            })
        })
        .collect::<Vec<_>>();

    for (i, handle) in handles.into_iter().enumerate() {
        let statement = handle.join().unwrap();
        assert_eq!(
            statement.generated_key_conditions()[0].value(),
            Some(&Scalar::Integer(i as i64))
        );
    }
}
