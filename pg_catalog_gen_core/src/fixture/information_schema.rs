// Code generated by pg-catalog-gen. DO NOT EDIT.

#![allow(unused_imports)]
use pg_catalog_gen_core::{
    Argument, Column, FuncParamMode, Function, Schema, Table, TableName, TypeName,
};
fn funcs_gen_information_schema() -> Vec<Function> {
    vec![]
}
pub fn gen_information_schema() -> Schema {
    let mut s = Schema::new("information_schema");
    s.funcs = funcs_gen_information_schema();
    s.tables = vec![
        Table {
            rel: TableName {
                catalog: "pg_catalog".to_string(),
                schema: "information_schema".to_string(),
                name: "sql_features".to_string(),
            },
            columns: vec![
                Column {
                    name: "feature_id".to_string(),
                    type_name: TypeName::new("text"),
                    is_not_null: true,
                    ..Default::default()
                },
                Column {
                    name: "is_supported".to_string(),
                    type_name: TypeName::new("character varying"),
                    length: Some(3),
                    ..Default::default()
                },
                Column {
                    name: "comments".to_string(),
                    type_name: TypeName::new("text"),
                    is_array: true,
                    ..Default::default()
                },
            ],
        },
    ];
    s
}
