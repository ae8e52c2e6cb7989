//! Glob query commands

use async_trait::async_trait;

use crate::protocol::command::{Command, arity_error, single_arg, store_error};
use crate::protocol::reply::Reply;
use crate::store::Store;

/// GETALL command: GETALL pattern
///
/// Replies with one `key=value` entry per matching key, sorted by key.
pub struct GetAllCmd;

#[async_trait]
impl Command for GetAllCmd {
    async fn execute(&self, args: &[String], store: &Store) -> Reply {
        let Some(pattern) = single_arg(args) else {
            return arity_error(args);
        };

        match store.get_all(pattern) {
            Ok(pairs) => Reply::Array(
                pairs
                    .iter()
                    .map(|pair| Reply::Status(pair.to_string()))
                    .collect(),
            ),
            Err(e) => store_error(e),
        }
    }
}

/// GETALLVALUES command: GETALLVALUES pattern
pub struct GetAllValuesCmd;

#[async_trait]
impl Command for GetAllValuesCmd {
    async fn execute(&self, args: &[String], store: &Store) -> Reply {
        let Some(pattern) = single_arg(args) else {
            return arity_error(args);
        };

        match store.get_all_values(pattern) {
            Ok(values) => Reply::Array(
                values
                    .into_iter()
                    .map(|value| Reply::Bulk(Some(value)))
                    .collect(),
            ),
            Err(e) => store_error(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn store() -> Store {
        let store = Store::new();
        store.set("/a/2", "two");
        store.set("/a/1", "one");
        store.set("/a/3", "three");
        store
    }

    #[tokio::test]
    async fn test_getall_cmd_execute() {
        let result = GetAllCmd.execute(&args(&["GETALL", "/a/*"]), &store()).await;
        assert_eq!(result.encode(), "1) /a/1=one\n2) /a/2=two\n3) /a/3=three");
    }

    #[tokio::test]
    async fn test_getallvalues_cmd_execute() {
        let result = GetAllValuesCmd
            .execute(&args(&["GETALLVALUES", "/a/[12]"]), &store())
            .await;
        assert_eq!(
            result,
            Reply::Array(vec![
                Reply::Bulk(Some("one".to_string())),
                Reply::Bulk(Some("two".to_string())),
            ])
        );
    }

    #[tokio::test]
    async fn test_getall_cmd_no_match() {
        let result = GetAllCmd.execute(&args(&["GETALL", "/b/*"]), &store()).await;
        assert_eq!(result, Reply::error("ERR no keys match"));
    }

    #[tokio::test]
    async fn test_getall_cmd_invalid_pattern() {
        let result = GetAllValuesCmd
            .execute(&args(&["GETALLVALUES", "/a/["]), &store())
            .await;
        match result {
            Reply::Error(msg) => assert!(msg.starts_with("ERR syntax error in pattern")),
            other => panic!("Expected error reply, got {:?}", other),
        }
    }
}
