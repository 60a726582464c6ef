#![allow(dead_code)]

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::task::{Context, Poll};

use async_trait::async_trait;
use calcq_client::{
    ClientError, ExpressionApi, ExpressionRecord, ExpressionView, RecordId, RenderedList,
};
use futures::channel::oneshot;
use serde_json::json;

pub type ListReply = Result<Vec<ExpressionRecord>, ClientError>;

/// A request seen by the scripted transport
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Create(String),
    List,
}

/// Transport that records every call and answers from queued replies.
///
/// Unscripted creates succeed and unscripted lists return no records.
/// Deferred list replies stay pending until their sender is used, which lets
/// tests decide the order in which overlapping refreshes complete.
#[derive(Default)]
pub struct ScriptedApi {
    calls: Mutex<Vec<Call>>,
    create_replies: Mutex<VecDeque<Result<(), ClientError>>>,
    list_replies: Mutex<VecDeque<ListReply>>,
    deferred_lists: Mutex<VecDeque<oneshot::Receiver<ListReply>>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply_create(&self, reply: Result<(), ClientError>) {
        self.create_replies.lock().unwrap().push_back(reply);
    }

    pub fn reply_list(&self, reply: ListReply) {
        self.list_replies.lock().unwrap().push_back(reply);
    }

    /// The next list call waits for a value on the returned sender.
    pub fn defer_list(&self) -> oneshot::Sender<ListReply> {
        let (tx, rx) = oneshot::channel();
        self.deferred_lists.lock().unwrap().push_back(rx);
        tx
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.calls().iter().filter(|c| **c == Call::List).count()
    }

    pub fn create_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Create(text) => Some(text),
                Call::List => None,
            })
            .collect()
    }
}

#[async_trait]
impl ExpressionApi for ScriptedApi {
    async fn create_expression(&self, expression: &str) -> Result<(), ClientError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Create(expression.to_string()));
        let reply = self.create_replies.lock().unwrap().pop_front();
        reply.unwrap_or(Ok(()))
    }

    async fn list_expressions(&self) -> ListReply {
        self.calls.lock().unwrap().push(Call::List);

        let deferred = self.deferred_lists.lock().unwrap().pop_front();
        if let Some(rx) = deferred {
            return rx
                .await
                .unwrap_or_else(|_| Err(ClientError::Transport("reply dropped".to_string())));
        }

        let reply = self.list_replies.lock().unwrap().pop_front();
        reply.unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// View that keeps everything the sync loop did to it.
#[derive(Default)]
pub struct RecordingView {
    input: Mutex<String>,
    notifications: Mutex<Vec<String>>,
    renders: Mutex<Vec<RenderedList>>,
}

impl RecordingView {
    pub fn with_input(text: &str) -> Self {
        let view = Self::default();
        *view.input.lock().unwrap() = text.to_string();
        view
    }

    pub fn input(&self) -> String {
        self.input.lock().unwrap().clone()
    }

    pub fn notifications(&self) -> Vec<String> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn renders(&self) -> Vec<RenderedList> {
        self.renders.lock().unwrap().clone()
    }

    /// Record ids of the list currently on screen
    pub fn displayed_ids(&self) -> Option<Vec<String>> {
        self.renders
            .lock()
            .unwrap()
            .last()
            .map(|list| list.blocks.iter().map(|b| b.id.clone()).collect())
    }
}

impl ExpressionView for RecordingView {
    fn input_value(&self) -> String {
        self.input()
    }

    fn clear_input(&self) {
        self.input.lock().unwrap().clear();
    }

    fn notify(&self, message: &str) {
        self.notifications.lock().unwrap().push(message.to_string());
    }

    fn render(&self, list: RenderedList) {
        self.renders.lock().unwrap().push(list);
    }
}

pub fn record(id: &str, status: &str) -> ExpressionRecord {
    ExpressionRecord {
        id: RecordId::new(id),
        expression: Some(format!("expr-{id}")),
        status: status.to_string(),
        result: None,
    }
}

pub fn finished(id: &str, result: f64) -> ExpressionRecord {
    ExpressionRecord {
        result: Some(json!(result)),
        ..record(id, "done")
    }
}

/// Return `Pending` once, waking immediately, so other branches of a
/// `join!` get polled before this one continues.
pub async fn yield_now() {
    struct YieldNow(bool);

    impl Future for YieldNow {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                return Poll::Ready(());
            }
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }

    YieldNow(false).await
}
