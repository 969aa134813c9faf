//! Scripted completion client for tests.
//!
//! Replies are served in the order they were queued, and every call is
//! recorded so tests can assert which stages ran and what they asked for.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{CompletionClient, ModelResult, ProviderError};

/// One recorded call to [`ScriptedCompletionClient::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub system: String,
    pub user: String,
    pub max_tokens: usize,
}

enum ScriptedReply {
    Text(String),
    Error(ProviderError),
}

pub struct ScriptedCompletionClient {
    replies: Mutex<VecDeque<ScriptedReply>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedCompletionClient {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(
                replies
                    .into_iter()
                    .map(|r| ScriptedReply::Text(r.into()))
                    .collect(),
            ),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queue another text reply after the existing ones.
    pub fn then_reply(self, reply: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(ScriptedReply::Text(reply.into()));
        self
    }

    /// Queue a failure after the existing replies.
    pub fn then_fail(self, error: ProviderError) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(ScriptedReply::Error(error));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionClient for ScriptedCompletionClient {
    async fn complete(&self, system: &str, user: &str, max_tokens: usize) -> ModelResult<String> {
        self.calls.lock().unwrap().push(RecordedCall {
            system: system.to_string(),
            user: user.to_string(),
            max_tokens,
        });

        match self.replies.lock().unwrap().pop_front() {
            Some(ScriptedReply::Text(text)) => Ok(text),
            Some(ScriptedReply::Error(err)) => Err(err),
            None => Err(ProviderError::InvalidResponse(
                "scripted client has no replies left".into(),
            )),
        }
    }

    fn model(&self) -> &str {
        "scripted-model"
    }

    fn provider(&self) -> &str {
        "scripted"
    }
}
