use std::collections::HashMap;

use async_trait::async_trait;

use crate::protocol::get::{ExistsCmd, GetCmd};
use crate::protocol::getall::{GetAllCmd, GetAllValuesCmd};
use crate::protocol::keyspace::{DelCmd, LenCmd, PurgeCmd};
use crate::protocol::list::{LsCmd, LsDirCmd};
use crate::protocol::reply::Reply;
use crate::protocol::set::SetCmd;
use crate::store::Store;

/// A shell command handler
#[async_trait]
pub trait Command: Send + Sync {
    /// Run the command. `args[0]` is the command name as typed.
    async fn execute(&self, args: &[String], store: &Store) -> Reply;
}

/// Reply for a command called with the wrong number of arguments
pub fn arity_error(args: &[String]) -> Reply {
    let name = args.first().map_or("", String::as_str);
    Reply::error(format!(
        "ERR wrong number of arguments for '{}' command",
        name.to_lowercase()
    ))
}

/// Reply for a failed store operation
pub fn store_error(err: crate::Error) -> Reply {
    Reply::error(format!("ERR {}", err))
}

/// The single argument of a one-argument command
pub fn single_arg(args: &[String]) -> Option<&str> {
    match args {
        [_, arg] => Some(arg.as_str()),
        _ => None,
    }
}

/// Registry of command handlers, keyed by upper-case command name
pub struct CommandFactory {
    commands: HashMap<&'static str, Box<dyn Command>>,
}

impl CommandFactory {
    /// Create a factory with every built-in command registered
    pub fn init() -> Self {
        let mut factory = Self {
            commands: HashMap::new(),
        };
        factory.register("GET", Box::new(GetCmd));
        factory.register("EXISTS", Box::new(ExistsCmd));
        factory.register("SET", Box::new(SetCmd));
        factory.register("DEL", Box::new(DelCmd));
        factory.register("PURGE", Box::new(PurgeCmd));
        factory.register("LEN", Box::new(LenCmd));
        factory.register("GETALL", Box::new(GetAllCmd));
        factory.register("GETALLVALUES", Box::new(GetAllValuesCmd));
        factory.register("LS", Box::new(LsCmd));
        factory.register("LSDIR", Box::new(LsDirCmd));
        factory
    }

    /// Register a handler, replacing any previous one with the same name
    pub fn register(&mut self, name: &'static str, cmd: Box<dyn Command>) {
        self.commands.insert(name, cmd);
    }

    /// Dispatch a parsed command line to its handler
    pub async fn execute(&self, args: &[String], store: &Store) -> Reply {
        let Some(name) = args.first() else {
            return Reply::error("ERR empty command");
        };

        match self.commands.get(name.to_uppercase().as_str()) {
            Some(cmd) => cmd.execute(args, store).await,
            None => Reply::error(format!("ERR unknown command '{}'", name)),
        }
    }
}

impl Default for CommandFactory {
    fn default() -> Self {
        Self::init()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_execute_set_and_get() {
        let factory = CommandFactory::init();
        let store = Store::new();

        let result = factory.execute(&args(&["SET", "/k", "v"]), &store).await;
        assert_eq!(result, Reply::ok());

        let result = factory.execute(&args(&["GET", "/k"]), &store).await;
        assert_eq!(result, Reply::Bulk(Some("v".to_string())));
    }

    #[tokio::test]
    async fn test_command_name_case_insensitive() {
        let factory = CommandFactory::init();
        let store = Store::new();

        factory.execute(&args(&["set", "/k", "v"]), &store).await;
        let result = factory.execute(&args(&["Exists", "/k"]), &store).await;
        assert_eq!(result, Reply::Integer(1));
    }

    #[tokio::test]
    async fn test_execute_unknown_command() {
        let factory = CommandFactory::init();
        let store = Store::new();

        let result = factory.execute(&args(&["FLUSHALL"]), &store).await;
        assert_eq!(result, Reply::error("ERR unknown command 'FLUSHALL'"));
    }

    #[tokio::test]
    async fn test_execute_empty_command() {
        let factory = CommandFactory::init();
        let store = Store::new();

        let result = factory.execute(&[], &store).await;
        assert_eq!(result, Reply::error("ERR empty command"));
    }

    #[tokio::test]
    async fn test_register_custom_command() {
        struct PingCmd;

        #[async_trait]
        impl Command for PingCmd {
            async fn execute(&self, _args: &[String], _store: &Store) -> Reply {
                Reply::Status("PONG".to_string())
            }
        }

        let mut factory = CommandFactory::init();
        factory.register("PING", Box::new(PingCmd));

        let result = factory.execute(&args(&["ping"]), &Store::new()).await;
        assert_eq!(result, Reply::Status("PONG".to_string()));
    }

    #[tokio::test]
    async fn test_handlers_called_without_args() {
        let store = Store::new();
        let handlers: Vec<Box<dyn Command>> = vec![
            Box::new(GetCmd),
            Box::new(ExistsCmd),
            Box::new(SetCmd),
            Box::new(DelCmd),
            Box::new(PurgeCmd),
            Box::new(LenCmd),
            Box::new(GetAllCmd),
            Box::new(GetAllValuesCmd),
            Box::new(LsCmd),
            Box::new(LsDirCmd),
        ];

        for handler in handlers {
            let result = handler.execute(&[], &store).await;
            assert_eq!(
                result,
                Reply::error("ERR wrong number of arguments for '' command")
            );
        }
    }

    #[test]
    fn test_arity_error_uses_command_name() {
        assert_eq!(
            arity_error(&args(&["LSDIR"])),
            Reply::error("ERR wrong number of arguments for 'lsdir' command")
        );
    }

    #[test]
    fn test_single_arg() {
        assert_eq!(single_arg(&args(&["GET", "/k"])), Some("/k"));
        assert_eq!(single_arg(&args(&["GET"])), None);
        assert_eq!(single_arg(&args(&["GET", "/a", "/b"])), None);
    }
}
