use crate::value::{decode_reply, encode_args};
use crate::CanisterError;
use candid::types::value::IDLValue;
use candid::types::{FuncMode, Function, Type};
use candid::TypeEnv;
use candid_parser::utils::CandidSource;
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterfaceError {
    #[error("failed to read canister interface {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse canister interface: {0}")]
    Parse(String),
    #[error("canister interface declares no service")]
    NoService,
}

/// Candid description of the canister.
///
/// Only the source text is kept. Candid types are `Rc`-based and not `Send`,
/// so they are rebuilt for each call and dropped before any `.await`.
#[derive(Debug, Clone)]
pub struct CanisterInterface {
    source: String,
}

/// Encoded arguments of a call and whether it goes out as a query.
#[derive(Debug)]
pub struct PreparedCall {
    pub arg: Vec<u8>,
    pub query: bool,
}

impl CanisterInterface {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, InterfaceError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| InterfaceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source)
    }

    /// Checks that the source is valid Candid with a service.
    ///
    /// Methods are not checked here; an undeclared one fails the call that uses it.
    pub fn parse(source: &str) -> Result<Self, InterfaceError> {
        ParsedInterface::parse(source)?;
        Ok(Self {
            source: source.to_string(),
        })
    }

    pub fn parsed(&self) -> Result<ParsedInterface, InterfaceError> {
        ParsedInterface::parse(&self.source)
    }

    pub fn prepare_call(
        &self,
        method: &str,
        args: &[IDLValue],
    ) -> Result<PreparedCall, CanisterError> {
        let parsed = self.parsed()?;
        let function = parsed.method(method)?;
        Ok(PreparedCall {
            arg: encode_args(parsed.env(), function, args)?,
            query: is_query(function),
        })
    }

    pub fn decode_reply(&self, method: &str, bytes: &[u8]) -> Result<Value, CanisterError> {
        let parsed = self.parsed()?;
        let function = parsed.method(method)?;
        decode_reply(parsed.env(), function, bytes)
    }
}

/// Type environment and service type of a parsed interface.
pub struct ParsedInterface {
    env: TypeEnv,
    actor: Type,
}

impl ParsedInterface {
    fn parse(source: &str) -> Result<Self, InterfaceError> {
        let (env, actor) = CandidSource::Text(source)
            .load()
            .map_err(|e| InterfaceError::Parse(e.to_string()))?;
        let actor = actor.ok_or(InterfaceError::NoService)?;
        Ok(Self { env, actor })
    }

    pub fn env(&self) -> &TypeEnv {
        &self.env
    }

    pub fn method<'a>(&'a self, name: &'a str) -> Result<&'a Function, CanisterError> {
        self.env
            .get_method(&self.actor, name)
            .map_err(|_| CanisterError::UnknownMethod(name.to_string()))
    }
}

pub fn is_query(function: &Function) -> bool {
    function
        .modes
        .iter()
        .any(|mode| matches!(mode, FuncMode::Query | FuncMode::CompositeQuery))
}

#[cfg(test)]
pub(crate) const POST_LIKES_DID: &str = r#"
type Post = record { id : text; title : text; content : text; created_at : nat64 };
type Result = variant { Ok : nat; Err : text };
type Result_1 = variant { Ok : Post; Err : text };
service : {
  create_post : (text, text, text) -> (Result_1);
  get_likes : (text) -> (Result) query;
  get_post : (text) -> (opt Post) query;
  get_posts_with_likes : () -> (vec record { Post; nat }) query;
  like : (text) -> (Result);
}
"#;
