//! 测试用的脚本化传输层：按 URL 返回预设响应，并记录调用顺序。

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{Request, Transport};
use crate::error::{ExportError, Result};

enum Scripted {
    Body(String),
    Failure(String),
}

#[derive(Default)]
pub struct ScriptedTransport {
    responses: HashMap<String, Scripted>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.responses.insert(url.into(), Scripted::Body(body.into()));
        self
    }

    pub fn fail(mut self, url: impl Into<String>, message: impl Into<String>) -> Self {
        self.responses
            .insert(url.into(), Scripted::Failure(message.into()));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: Request) -> Result<String> {
        let url = request.url().to_string();
        self.calls.lock().unwrap().push(url.clone());
        match self.responses.get(&url) {
            Some(Scripted::Body(body)) => Ok(body.clone()),
            Some(Scripted::Failure(message)) => Err(ExportError::Transport {
                url,
                message: message.clone(),
            }),
            None => Err(ExportError::Transport {
                message: format!("no scripted response for {}", url),
                url,
            }),
        }
    }
}
