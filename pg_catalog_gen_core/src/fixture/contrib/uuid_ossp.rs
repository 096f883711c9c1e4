// Code generated by pg-catalog-gen. DO NOT EDIT.

#![allow(unused_imports)]
use pg_catalog_gen_core::{
    Argument, Column, FuncParamMode, Function, Schema, Table, TableName, TypeName,
};
fn funcs_uuid_ossp() -> Vec<Function> {
    vec![
        Function {
            name: "uuid_nil".to_string(),
            args: vec![],
            return_type: TypeName::new("uuid"),
        },
    ]
}
pub fn uuid_ossp() -> Schema {
    let mut s = Schema::new("pg_catalog");
    s.funcs = funcs_uuid_ossp();
    s
}
