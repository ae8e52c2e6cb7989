use crate::protocol::command::{Command, arity_error};
use crate::protocol::reply::Reply;
use crate::store::Store;
use async_trait::async_trait;

/// Parameters for SET command
#[derive(Debug, Clone, PartialEq)]
pub struct SetParams {
    pub key: String,
    pub value: String,
}

impl SetParams {
    /// Parse SET command parameters. Everything after the key is the value,
    /// joined by single spaces.
    fn parse(args: &[String]) -> Option<Self> {
        match args {
            [_, key, value @ ..] if !value.is_empty() => Some(SetParams {
                key: key.clone(),
                value: value.join(" "),
            }),
            _ => None,
        }
    }
}

/// SET command executor: SET key value...
pub struct SetCmd;

#[async_trait]
impl Command for SetCmd {
    async fn execute(&self, args: &[String], store: &Store) -> Reply {
        let params = match SetParams::parse(args) {
            Some(params) => params,
            None => return arity_error(args),
        };

        store.set(params.key, params.value);
        Reply::ok()
    }
}
