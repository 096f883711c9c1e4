// Code generated by pg-catalog-gen. DO NOT EDIT.

#![allow(unused_imports)]
use pg_catalog_gen_core::{
    Argument, Column, FuncParamMode, Function, Schema, Table, TableName, TypeName,
};
fn funcs_pgcrypto() -> Vec<Function> {
    vec![
        Function {
            name: "digest".to_string(),
            args: vec![
                Argument {
                    name: "data".to_string(),
                    type_name: TypeName::new("text"),
                    ..Default::default()
                },
                Argument {
                    name: "type".to_string(),
                    type_name: TypeName::new("text"),
                    ..Default::default()
                },
            ],
            return_type: TypeName::new("bytea"),
        },
        Function {
            name: "digest".to_string(),
            args: vec![
                Argument {
                    type_name: TypeName::new("bytea"),
                    ..Default::default()
                },
                Argument {
                    type_name: TypeName::new("text"),
                    ..Default::default()
                },
            ],
            return_type: TypeName::new("bytea"),
        },
        Function {
            name: "gen_salt".to_string(),
            args: vec![
                Argument {
                    type_name: TypeName::new("text"),
                    ..Default::default()
                },
                Argument {
                    name: "iter_count".to_string(),
                    type_name: TypeName::new("integer"),
                    has_default: true,
                    ..Default::default()
                },
            ],
            return_type: TypeName::new("text"),
        },
        Function {
            name: "pgp_armor_headers".to_string(),
            args: vec![
                Argument {
                    type_name: TypeName::new("text"),
                    ..Default::default()
                },
                Argument {
                    name: "key".to_string(),
                    type_name: TypeName::new("text"),
                    mode: FuncParamMode::Out,
                    ..Default::default()
                },
                Argument {
                    name: "value".to_string(),
                    type_name: TypeName::new("text"),
                    mode: FuncParamMode::Out,
                    ..Default::default()
                },
            ],
            return_type: TypeName::new("record"),
        },
    ]
}
pub fn pgcrypto() -> Schema {
    let mut s = Schema::new("pg_catalog");
    s.funcs = funcs_pgcrypto();
    s
}
