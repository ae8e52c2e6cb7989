use async_trait::async_trait;

use crate::protocol::command::{Command, arity_error, single_arg};
use crate::protocol::reply::Reply;
use crate::store::Store;

fn segments(names: Vec<String>) -> Reply {
    Reply::Array(names.into_iter().map(Reply::Status).collect())
}

/// LS command: LS path
pub struct LsCmd;

#[async_trait]
impl Command for LsCmd {
    async fn execute(&self, args: &[String], store: &Store) -> Reply {
        match single_arg(args) {
            Some(path) => segments(store.list(path)),
            None => arity_error(args),
        }
    }
}

/// LSDIR command: LSDIR path
pub struct LsDirCmd;

#[async_trait]
impl Command for LsDirCmd {
    async fn execute(&self, args: &[String], store: &Store) -> Reply {
        match single_arg(args) {
            Some(path) => segments(store.list_dir(path)),
            None => arity_error(args),
        }
    }
}
