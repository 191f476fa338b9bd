use biometrics::{Collector, Counter};

pub(crate) static CLIENT_REQUESTS: Counter = Counter::new("responsum.client.requests");
pub(crate) static CLIENT_REQUEST_ERRORS: Counter = Counter::new("responsum.client.request_errors");

pub(crate) static STREAM_EVENTS: Counter = Counter::new("responsum.stream.events");
pub(crate) static STREAM_ERRORS: Counter = Counter::new("responsum.stream.errors");
pub(crate) static STREAM_CHUNKS: Counter = Counter::new("responsum.stream.chunks");

pub(crate) static CHAT_EXCHANGES: Counter = Counter::new("responsum.chat.exchanges");
pub(crate) static CHAT_EXCHANGE_ERRORS: Counter = Counter::new("responsum.chat.exchange_errors");
pub(crate) static CHAT_TOOL_EVENTS: Counter = Counter::new("responsum.chat.tool_events");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&CLIENT_REQUESTS);
    collector.register_counter(&CLIENT_REQUEST_ERRORS);

    collector.register_counter(&STREAM_EVENTS);
    collector.register_counter(&STREAM_ERRORS);
    collector.register_counter(&STREAM_CHUNKS);

    collector.register_counter(&CHAT_EXCHANGES);
    collector.register_counter(&CHAT_EXCHANGE_ERRORS);
    collector.register_counter(&CHAT_TOOL_EVENTS);
}
