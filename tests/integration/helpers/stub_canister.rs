use async_trait::async_trait;
use canister::{CanisterClient, CanisterError};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// What every call on the stub answers with.
#[derive(Clone, Debug)]
pub enum Reply {
    Value(Value),
    Fail(String),
}

/// Stand-in for the canister that records each call it receives.
#[derive(Clone)]
pub struct StubCanister {
    reply: Reply,
    calls: Arc<Mutex<Vec<(String, Vec<String>)>>>,
}

impl StubCanister {
    pub fn replying(value: Value) -> Self {
        Self::new(Reply::Value(value))
    }

    pub fn failing(message: &str) -> Self {
        Self::new(Reply::Fail(message.to_string()))
    }

    fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }

    fn respond(&self, method: &str, args: &[&str]) -> Result<Value, CanisterError> {
        self.calls.lock().unwrap().push((
            method.to_string(),
            args.iter().map(|a| a.to_string()).collect(),
        ));
        match &self.reply {
            Reply::Value(value) => Ok(value.clone()),
            Reply::Fail(message) => Err(CanisterError::Call(message.clone())),
        }
    }
}

#[async_trait]
impl CanisterClient for StubCanister {
    async fn get_likes(&self, post_id: &str) -> Result<Value, CanisterError> {
        self.respond("get_likes", &[post_id])
    }

    async fn like(&self, post_id: &str) -> Result<Value, CanisterError> {
        self.respond("like", &[post_id])
    }

    async fn get_posts_with_likes(&self) -> Result<Value, CanisterError> {
        self.respond("get_posts_with_likes", &[])
    }

    async fn create_post(
        &self,
        id: &str,
        title: &str,
        content: &str,
    ) -> Result<Value, CanisterError> {
        self.respond("create_post", &[id, title, content])
    }

    async fn get_post(&self, post_id: &str) -> Result<Value, CanisterError> {
        self.respond("get_post", &[post_id])
    }
}
