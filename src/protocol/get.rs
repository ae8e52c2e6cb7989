use async_trait::async_trait;

use crate::protocol::command::{Command, arity_error, single_arg, store_error};
use crate::protocol::reply::Reply;
use crate::store::Store;

/// GET command: GET key
pub struct GetCmd;

#[async_trait]
impl Command for GetCmd {
    async fn execute(&self, args: &[String], store: &Store) -> Reply {
        let Some(key) = single_arg(args) else {
            return arity_error(args);
        };

        match store.get_value(key) {
            Ok(value) => Reply::Bulk(Some(value)),
            Err(e) => store_error(e),
        }
    }
}

/// EXISTS command: EXISTS key
pub struct ExistsCmd;

#[async_trait]
impl Command for ExistsCmd {
    async fn execute(&self, args: &[String], store: &Store) -> Reply {
        match single_arg(args) {
            Some(key) => Reply::Integer(store.exists(key) as i64),
            None => arity_error(args),
        }
    }
}
