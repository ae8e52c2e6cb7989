//! Commands that remove entries or inspect the whole keyspace

use async_trait::async_trait;

use crate::protocol::command::{Command, arity_error, single_arg};
use crate::protocol::reply::Reply;
use crate::store::Store;

/// DEL command: DEL key
pub struct DelCmd;

#[async_trait]
impl Command for DelCmd {
    async fn execute(&self, args: &[String], store: &Store) -> Reply {
        match single_arg(args) {
            Some(key) => {
                store.del(key);
                Reply::ok()
            }
            None => arity_error(args),
        }
    }
}

/// PURGE command: PURGE
pub struct PurgeCmd;

#[async_trait]
impl Command for PurgeCmd {
    async fn execute(&self, args: &[String], store: &Store) -> Reply {
        if args.len() != 1 {
            return arity_error(args);
        }
        store.purge();
        Reply::ok()
    }
}

/// LEN command: LEN
pub struct LenCmd;

#[async_trait]
impl Command for LenCmd {
    async fn execute(&self, args: &[String], store: &Store) -> Reply {
        if args.len() != 1 {
            return arity_error(args);
        }
        Reply::Integer(store.len() as i64)
    }
}
