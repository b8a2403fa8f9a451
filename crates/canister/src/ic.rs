use crate::interface::CanisterInterface;
use crate::{methods, CanisterClient, CanisterError, Network};
use async_trait::async_trait;
use candid::types::value::IDLValue;
use candid::Principal;
use ic_agent::identity::AnonymousIdentity;
use ic_agent::Agent;
use serde_json::Value;

/// Canister handle backed by `ic-agent`, calling under the anonymous identity.
pub struct IcCanister {
    agent: Agent,
    canister_id: Principal,
    interface: CanisterInterface,
}

impl IcCanister {
    pub async fn connect(
        network: Network,
        canister_id: Principal,
        interface: CanisterInterface,
    ) -> Result<Self, CanisterError> {
        let agent = Agent::builder()
            .with_url(network.endpoint())
            .with_identity(AnonymousIdentity)
            .build()?;

        if network.needs_root_key() {
            agent.fetch_root_key().await?;
        }

        tracing::info!(
            "Agent connected to {} for canister {}",
            network.endpoint(),
            canister_id
        );

        Ok(Self {
            agent,
            canister_id,
            interface,
        })
    }

    pub fn canister_id(&self) -> &Principal {
        &self.canister_id
    }

    async fn call(&self, method: &str, args: Vec<IDLValue>) -> Result<Value, CanisterError> {
        let call = self.interface.prepare_call(method, &args)?;

        tracing::debug!("Calling {} on {}", method, self.canister_id);

        let reply = if call.query {
            self.agent
                .query(&self.canister_id, method)
                .with_arg(call.arg)
                .call()
                .await?
        } else {
            self.agent
                .update(&self.canister_id, method)
                .with_arg(call.arg)
                .call_and_wait()
                .await?
        };

        self.interface.decode_reply(method, &reply)
    }
}

fn text(s: &str) -> IDLValue {
    IDLValue::Text(s.to_string())
}

#[async_trait]
impl CanisterClient for IcCanister {
    async fn get_likes(&self, post_id: &str) -> Result<Value, CanisterError> {
        self.call(methods::GET_LIKES, vec![text(post_id)]).await
    }

    async fn like(&self, post_id: &str) -> Result<Value, CanisterError> {
        self.call(methods::LIKE, vec![text(post_id)]).await
    }

    async fn get_posts_with_likes(&self) -> Result<Value, CanisterError> {
        self.call(methods::GET_POSTS_WITH_LIKES, vec![]).await
    }

    async fn create_post(
        &self,
        id: &str,
        title: &str,
        content: &str,
    ) -> Result<Value, CanisterError> {
        self.call(
            methods::CREATE_POST,
            vec![text(id), text(title), text(content)],
        )
        .await
    }

    async fn get_post(&self, post_id: &str) -> Result<Value, CanisterError> {
        self.call(methods::GET_POST, vec![text(post_id)]).await
    }
}
