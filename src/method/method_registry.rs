use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::method::{ArgSpec, ArgType::*, MethodDescriptor};

/// Every method of the protocol, client- and server-originated alike: the
/// decoder must resolve whatever arrives on the wire.
///
/// Reserved slots are part of the wire layout but are hidden from callers
/// by the codec.
pub static DESCRIPTORS: &[MethodDescriptor] = &[
    // connection (class 10)
    MethodDescriptor {
        class_id: 10,
        method_id: 10,
        name: "connection.start",
        has_content: false,
        args: &[
            ArgSpec::new("version-major", Octet),
            ArgSpec::new("version-minor", Octet),
            ArgSpec::new("server-properties", Table),
            ArgSpec::new("mechanisms", LongStr),
            ArgSpec::new("locales", LongStr),
        ],
    },
    MethodDescriptor {
        class_id: 10,
        method_id: 11,
        name: "connection.start-ok",
        has_content: false,
        args: &[
            ArgSpec::new("client-properties", Table),
            ArgSpec::new("mechanism", ShortStr),
            ArgSpec::new("response", LongStr),
            ArgSpec::new("locale", ShortStr),
        ],
    },
    MethodDescriptor {
        class_id: 10,
        method_id: 20,
        name: "connection.secure",
        has_content: false,
        args: &[ArgSpec::new("challenge", LongStr)],
    },
    MethodDescriptor {
        class_id: 10,
        method_id: 21,
        name: "connection.secure-ok",
        has_content: false,
        args: &[ArgSpec::new("response", LongStr)],
    },
    MethodDescriptor {
        class_id: 10,
        method_id: 30,
        name: "connection.tune",
        has_content: false,
        args: &[
            ArgSpec::new("channel-max", Short),
            ArgSpec::new("frame-max", Long),
            ArgSpec::new("heartbeat", Short),
        ],
    },
    MethodDescriptor {
        class_id: 10,
        method_id: 31,
        name: "connection.tune-ok",
        has_content: false,
        args: &[
            ArgSpec::new("channel-max", Short),
            ArgSpec::new("frame-max", Long),
            ArgSpec::new("heartbeat", Short),
        ],
    },
    MethodDescriptor {
        class_id: 10,
        method_id: 40,
        name: "connection.open",
        has_content: false,
        args: &[
            ArgSpec::new("virtual-host", ShortStr),
            ArgSpec::reserved("reserved-1", ShortStr),
            ArgSpec::reserved("reserved-2", Bit),
        ],
    },
    MethodDescriptor {
        class_id: 10,
        method_id: 41,
        name: "connection.open-ok",
        has_content: false,
        args: &[ArgSpec::reserved("reserved-1", ShortStr)],
    },
    MethodDescriptor {
        class_id: 10,
        method_id: 50,
        name: "connection.close",
        has_content: false,
        args: &[
            ArgSpec::new("reply-code", Short),
            ArgSpec::new("reply-text", ShortStr),
            ArgSpec::new("class-id", Short),
            ArgSpec::new("method-id", Short),
        ],
    },
    MethodDescriptor {
        class_id: 10,
        method_id: 51,
        name: "connection.close-ok",
        has_content: false,
        args: &[],
    },
    MethodDescriptor {
        class_id: 10,
        method_id: 60,
        name: "connection.blocked",
        has_content: false,
        args: &[ArgSpec::new("reason", ShortStr)],
    },
    MethodDescriptor {
        class_id: 10,
        method_id: 61,
        name: "connection.unblocked",
        has_content: false,
        args: &[],
    },
    MethodDescriptor {
        class_id: 10,
        method_id: 70,
        name: "connection.update-secret",
        has_content: false,
        args: &[
            ArgSpec::new("new-secret", LongStr),
            ArgSpec::new("reason", ShortStr),
        ],
    },
    MethodDescriptor {
        class_id: 10,
        method_id: 71,
        name: "connection.update-secret-ok",
        has_content: false,
        args: &[],
    },
    // channel (class 20)
    MethodDescriptor {
        class_id: 20,
        method_id: 10,
        name: "channel.open",
        has_content: false,
        args: &[ArgSpec::reserved("reserved-1", ShortStr)],
    },
    MethodDescriptor {
        class_id: 20,
        method_id: 11,
        name: "channel.open-ok",
        has_content: false,
        args: &[ArgSpec::reserved("reserved-1", LongStr)],
    },
    MethodDescriptor {
        class_id: 20,
        method_id: 20,
        name: "channel.flow",
        has_content: false,
        args: &[ArgSpec::new("active", Bit)],
    },
    MethodDescriptor {
        class_id: 20,
        method_id: 21,
        name: "channel.flow-ok",
        has_content: false,
        args: &[ArgSpec::new("active", Bit)],
    },
    MethodDescriptor {
        class_id: 20,
        method_id: 40,
        name: "channel.close",
        has_content: false,
        args: &[
            ArgSpec::new("reply-code", Short),
            ArgSpec::new("reply-text", ShortStr),
            ArgSpec::new("class-id", Short),
            ArgSpec::new("method-id", Short),
        ],
    },
    MethodDescriptor {
        class_id: 20,
        method_id: 41,
        name: "channel.close-ok",
        has_content: false,
        args: &[],
    },
    // exchange (class 40)
    MethodDescriptor {
        class_id: 40,
        method_id: 10,
        name: "exchange.declare",
        has_content: false,
        args: &[
            ArgSpec::reserved("reserved-1", Short),
            ArgSpec::new("exchange", ShortStr),
            ArgSpec::new("type", ShortStr),
            ArgSpec::new("passive", Bit),
            ArgSpec::new("durable", Bit),
            ArgSpec::new("auto-delete", Bit),
            ArgSpec::new("internal", Bit),
            ArgSpec::new("no-wait", Bit),
            ArgSpec::new("arguments", Table),
        ],
    },
    MethodDescriptor {
        class_id: 40,
        method_id: 11,
        name: "exchange.declare-ok",
        has_content: false,
        args: &[],
    },
    MethodDescriptor {
        class_id: 40,
        method_id: 20,
        name: "exchange.delete",
        has_content: false,
        args: &[
            ArgSpec::reserved("reserved-1", Short),
            ArgSpec::new("exchange", ShortStr),
            ArgSpec::new("if-unused", Bit),
            ArgSpec::new("no-wait", Bit),
        ],
    },
    MethodDescriptor {
        class_id: 40,
        method_id: 21,
        name: "exchange.delete-ok",
        has_content: false,
        args: &[],
    },
    MethodDescriptor {
        class_id: 40,
        method_id: 30,
        name: "exchange.bind",
        has_content: false,
        args: &[
            ArgSpec::reserved("reserved-1", Short),
            ArgSpec::new("destination", ShortStr),
            ArgSpec::new("source", ShortStr),
            ArgSpec::new("routing-key", ShortStr),
            ArgSpec::new("no-wait", Bit),
            ArgSpec::new("arguments", Table),
        ],
    },
    MethodDescriptor {
        class_id: 40,
        method_id: 31,
        name: "exchange.bind-ok",
        has_content: false,
        args: &[],
    },
    MethodDescriptor {
        class_id: 40,
        method_id: 40,
        name: "exchange.unbind",
        has_content: false,
        args: &[
            ArgSpec::reserved("reserved-1", Short),
            ArgSpec::new("destination", ShortStr),
            ArgSpec::new("source", ShortStr),
            ArgSpec::new("routing-key", ShortStr),
            ArgSpec::new("no-wait", Bit),
            ArgSpec::new("arguments", Table),
        ],
    },
    MethodDescriptor {
        class_id: 40,
        method_id: 51,
        name: "exchange.unbind-ok",
        has_content: false,
        args: &[],
    },
    // queue (class 50)
    MethodDescriptor {
        class_id: 50,
        method_id: 10,
        name: "queue.declare",
        has_content: false,
        args: &[
            ArgSpec::reserved("reserved-1", Short),
            ArgSpec::new("queue", ShortStr),
            ArgSpec::new("passive", Bit),
            ArgSpec::new("durable", Bit),
            ArgSpec::new("exclusive", Bit),
            ArgSpec::new("auto-delete", Bit),
            ArgSpec::new("no-wait", Bit),
            ArgSpec::new("arguments", Table),
        ],
    },
    MethodDescriptor {
        class_id: 50,
        method_id: 11,
        name: "queue.declare-ok",
        has_content: false,
        args: &[
            ArgSpec::new("queue", ShortStr),
            ArgSpec::new("message-count", Long),
            ArgSpec::new("consumer-count", Long),
        ],
    },
    MethodDescriptor {
        class_id: 50,
        method_id: 20,
        name: "queue.bind",
        has_content: false,
        args: &[
            ArgSpec::reserved("reserved-1", Short),
            ArgSpec::new("queue", ShortStr),
            ArgSpec::new("exchange", ShortStr),
            ArgSpec::new("routing-key", ShortStr),
            ArgSpec::new("no-wait", Bit),
            ArgSpec::new("arguments", Table),
        ],
    },
    MethodDescriptor {
        class_id: 50,
        method_id: 21,
        name: "queue.bind-ok",
        has_content: false,
        args: &[],
    },
    MethodDescriptor {
        class_id: 50,
        method_id: 30,
        name: "queue.purge",
        has_content: false,
        args: &[
            ArgSpec::reserved("reserved-1", Short),
            ArgSpec::new("queue", ShortStr),
            ArgSpec::new("no-wait", Bit),
        ],
    },
    MethodDescriptor {
        class_id: 50,
        method_id: 31,
        name: "queue.purge-ok",
        has_content: false,
        args: &[ArgSpec::new("message-count", Long)],
    },
    MethodDescriptor {
        class_id: 50,
        method_id: 40,
        name: "queue.delete",
        has_content: false,
        args: &[
            ArgSpec::reserved("reserved-1", Short),
            ArgSpec::new("queue", ShortStr),
            ArgSpec::new("if-unused", Bit),
            ArgSpec::new("if-empty", Bit),
            ArgSpec::new("no-wait", Bit),
        ],
    },
    MethodDescriptor {
        class_id: 50,
        method_id: 41,
        name: "queue.delete-ok",
        has_content: false,
        args: &[ArgSpec::new("message-count", Long)],
    },
    MethodDescriptor {
        class_id: 50,
        method_id: 50,
        name: "queue.unbind",
        has_content: false,
        args: &[
            ArgSpec::reserved("reserved-1", Short),
            ArgSpec::new("queue", ShortStr),
            ArgSpec::new("exchange", ShortStr),
            ArgSpec::new("routing-key", ShortStr),
            ArgSpec::new("arguments", Table),
        ],
    },
    MethodDescriptor {
        class_id: 50,
        method_id: 51,
        name: "queue.unbind-ok",
        has_content: false,
        args: &[],
    },
    // basic (class 60)
    MethodDescriptor {
        class_id: 60,
        method_id: 10,
        name: "basic.qos",
        has_content: false,
        args: &[
            ArgSpec::new("prefetch-size", Long),
            ArgSpec::new("prefetch-count", Short),
            ArgSpec::new("global", Bit),
        ],
    },
    MethodDescriptor {
        class_id: 60,
        method_id: 11,
        name: "basic.qos-ok",
        has_content: false,
        args: &[],
    },
    MethodDescriptor {
        class_id: 60,
        method_id: 20,
        name: "basic.consume",
        has_content: false,
        args: &[
            ArgSpec::reserved("reserved-1", Short),
            ArgSpec::new("queue", ShortStr),
            ArgSpec::new("consumer-tag", ShortStr),
            ArgSpec::new("no-local", Bit),
            ArgSpec::new("no-ack", Bit),
            ArgSpec::new("exclusive", Bit),
            ArgSpec::new("no-wait", Bit),
            ArgSpec::new("arguments", Table),
        ],
    },
    MethodDescriptor {
        class_id: 60,
        method_id: 21,
        name: "basic.consume-ok",
        has_content: false,
        args: &[ArgSpec::new("consumer-tag", ShortStr)],
    },
    MethodDescriptor {
        class_id: 60,
        method_id: 30,
        name: "basic.cancel",
        has_content: false,
        args: &[
            ArgSpec::new("consumer-tag", ShortStr),
            ArgSpec::new("no-wait", Bit),
        ],
    },
    MethodDescriptor {
        class_id: 60,
        method_id: 31,
        name: "basic.cancel-ok",
        has_content: false,
        args: &[ArgSpec::new("consumer-tag", ShortStr)],
    },
    MethodDescriptor {
        class_id: 60,
        method_id: 40,
        name: "basic.publish",
        has_content: true,
        args: &[
            ArgSpec::reserved("reserved-1", Short),
            ArgSpec::new("exchange", ShortStr),
            ArgSpec::new("routing-key", ShortStr),
            ArgSpec::new("mandatory", Bit),
            ArgSpec::new("immediate", Bit),
        ],
    },
    MethodDescriptor {
        class_id: 60,
        method_id: 50,
        name: "basic.return",
        has_content: true,
        args: &[
            ArgSpec::new("reply-code", Short),
            ArgSpec::new("reply-text", ShortStr),
            ArgSpec::new("exchange", ShortStr),
            ArgSpec::new("routing-key", ShortStr),
        ],
    },
    MethodDescriptor {
        class_id: 60,
        method_id: 60,
        name: "basic.deliver",
        has_content: true,
        args: &[
            ArgSpec::new("consumer-tag", ShortStr),
            ArgSpec::new("delivery-tag", LongLong),
            ArgSpec::new("redelivered", Bit),
            ArgSpec::new("exchange", ShortStr),
            ArgSpec::new("routing-key", ShortStr),
        ],
    },
    MethodDescriptor {
        class_id: 60,
        method_id: 70,
        name: "basic.get",
        has_content: false,
        args: &[
            ArgSpec::reserved("reserved-1", Short),
            ArgSpec::new("queue", ShortStr),
            ArgSpec::new("no-ack", Bit),
        ],
    },
    MethodDescriptor {
        class_id: 60,
        method_id: 71,
        name: "basic.get-ok",
        has_content: true,
        args: &[
            ArgSpec::new("delivery-tag", LongLong),
            ArgSpec::new("redelivered", Bit),
            ArgSpec::new("exchange", ShortStr),
            ArgSpec::new("routing-key", ShortStr),
            ArgSpec::new("message-count", Long),
        ],
    },
    MethodDescriptor {
        class_id: 60,
        method_id: 72,
        name: "basic.get-empty",
        has_content: false,
        args: &[ArgSpec::reserved("reserved-1", ShortStr)],
    },
    MethodDescriptor {
        class_id: 60,
        method_id: 80,
        name: "basic.ack",
        has_content: false,
        args: &[
            ArgSpec::new("delivery-tag", LongLong),
            ArgSpec::new("multiple", Bit),
        ],
    },
    MethodDescriptor {
        class_id: 60,
        method_id: 90,
        name: "basic.reject",
        has_content: false,
        args: &[
            ArgSpec::new("delivery-tag", LongLong),
            ArgSpec::new("requeue", Bit),
        ],
    },
    MethodDescriptor {
        class_id: 60,
        method_id: 100,
        name: "basic.recover-async",
        has_content: false,
        args: &[ArgSpec::new("requeue", Bit)],
    },
    MethodDescriptor {
        class_id: 60,
        method_id: 110,
        name: "basic.recover",
        has_content: false,
        args: &[ArgSpec::new("requeue", Bit)],
    },
    MethodDescriptor {
        class_id: 60,
        method_id: 111,
        name: "basic.recover-ok",
        has_content: false,
        args: &[],
    },
    MethodDescriptor {
        class_id: 60,
        method_id: 120,
        name: "basic.nack",
        has_content: false,
        args: &[
            ArgSpec::new("delivery-tag", LongLong),
            ArgSpec::new("multiple", Bit),
            ArgSpec::new("requeue", Bit),
        ],
    },
    // confirm (class 85)
    MethodDescriptor {
        class_id: 85,
        method_id: 10,
        name: "confirm.select",
        has_content: false,
        args: &[ArgSpec::new("no-wait", Bit)],
    },
    MethodDescriptor {
        class_id: 85,
        method_id: 11,
        name: "confirm.select-ok",
        has_content: false,
        args: &[],
    },
    // tx (class 90)
    MethodDescriptor {
        class_id: 90,
        method_id: 10,
        name: "tx.select",
        has_content: false,
        args: &[],
    },
    MethodDescriptor {
        class_id: 90,
        method_id: 11,
        name: "tx.select-ok",
        has_content: false,
        args: &[],
    },
    MethodDescriptor {
        class_id: 90,
        method_id: 20,
        name: "tx.commit",
        has_content: false,
        args: &[],
    },
    MethodDescriptor {
        class_id: 90,
        method_id: 21,
        name: "tx.commit-ok",
        has_content: false,
        args: &[],
    },
    MethodDescriptor {
        class_id: 90,
        method_id: 30,
        name: "tx.rollback",
        has_content: false,
        args: &[],
    },
    MethodDescriptor {
        class_id: 90,
        method_id: 31,
        name: "tx.rollback-ok",
        has_content: false,
        args: &[],
    },
];

static INDEX: Lazy<HashMap<u32, &'static MethodDescriptor>> =
    Lazy::new(|| DESCRIPTORS.iter().map(|m| (m.index(), m)).collect());

/// Constant-time descriptor lookup by (class-id, method-id).
pub fn lookup(class_id: u16, method_id: u16) -> Option<&'static MethodDescriptor> {
    lookup_index(((class_id as u32) << 16) | method_id as u32)
}

pub fn lookup_index(index: u32) -> Option<&'static MethodDescriptor> {
    INDEX.get(&index).copied()
}
