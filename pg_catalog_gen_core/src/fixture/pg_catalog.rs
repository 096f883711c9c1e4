// Code generated by pg-catalog-gen. DO NOT EDIT.

#![allow(unused_imports)]
use pg_catalog_gen_core::{
    Argument, Column, FuncParamMode, Function, Schema, Table, TableName, TypeName,
};
fn funcs_gen_pg_catalog() -> Vec<Function> {
    vec![
        Function {
            name: "lower".to_string(),
            args: vec![
                Argument {
                    type_name: TypeName::new("text"),
                    ..Default::default()
                },
            ],
            return_type: TypeName::new("text"),
        },
        Function {
            name: "lower".to_string(),
            args: vec![
                Argument {
                    type_name: TypeName::new("anyrange"),
                    ..Default::default()
                },
            ],
            return_type: TypeName::new("anyelement"),
        },
    ]
}
pub fn gen_pg_catalog() -> Schema {
    let mut s = Schema::new("pg_catalog");
    s.funcs = funcs_gen_pg_catalog();
    s
}
