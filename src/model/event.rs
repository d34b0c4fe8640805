//! Event records: basic events, gates, house events, and their variants
//!
//! Events of every kind share one identity space keyed by `(kind, num)`.
//! The kind and symbol codes below are persisted values shared with other
//! tools reading the same database; they must never change.

use serde::{Deserialize, Serialize};

use super::audit::AuditTrail;

/// Identity of an event: `(kind code, num)`.
pub type EventKey = (i16, i32);

/// Discriminator for the polymorphic event hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub enum EventKind {
    /// Basic failure event
    BasicEvent,
    /// Logic gate
    Gate,
    /// Postulated (house) event
    HouseEvent,
    /// Consequence of an accident sequence
    ConsequenceEvent,
    /// Template used to generate events
    TemplateEvent,
    /// Initiating event of an event tree
    InitiatingEvent,
    /// Function event of an event tree
    FunctionEvent,
    /// Generated common-cause event, first family
    CcfEvent1,
    /// Generated common-cause event, second family
    CcfEvent2,
}

impl EventKind {
    /// All kinds, in code order.
    pub const ALL: [EventKind; 9] = [
        EventKind::BasicEvent,
        EventKind::Gate,
        EventKind::HouseEvent,
        EventKind::ConsequenceEvent,
        EventKind::TemplateEvent,
        EventKind::InitiatingEvent,
        EventKind::FunctionEvent,
        EventKind::CcfEvent1,
        EventKind::CcfEvent2,
    ];

    /// The persisted discriminator code.
    pub const fn code(self) -> i16 {
        match self {
            EventKind::BasicEvent => 5,
            EventKind::Gate => 6,
            EventKind::HouseEvent => 7,
            EventKind::ConsequenceEvent => 8,
            EventKind::TemplateEvent => 9,
            EventKind::InitiatingEvent => 10,
            EventKind::FunctionEvent => 11,
            EventKind::CcfEvent1 => 12,
            EventKind::CcfEvent2 => 21,
        }
    }

    pub fn from_code(code: i16) -> Option<EventKind> {
        EventKind::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Record-class name used in catalogs and log output.
    pub const fn class_name(self) -> &'static str {
        match self {
            EventKind::BasicEvent => "BasicEvents",
            EventKind::Gate => "Gates",
            EventKind::HouseEvent => "HouseEvents",
            EventKind::ConsequenceEvent => "ConsequenceEvents",
            EventKind::TemplateEvent => "TemplateEvents",
            EventKind::InitiatingEvent => "InitiatingEvents",
            EventKind::FunctionEvent => "FunctionEvents",
            EventKind::CcfEvent1 => "CcfEvents1",
            EventKind::CcfEvent2 => "CcfEvents2",
        }
    }
}

impl TryFrom<i16> for EventKind {
    type Error = String;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        EventKind::from_code(code).ok_or_else(|| format!("unknown event kind code {}", code))
    }
}

impl From<EventKind> for i16 {
    fn from(kind: EventKind) -> i16 {
        kind.code()
    }
}

/// Logic-gate shape of an event.
///
/// The numeric gaps are real: codes 0-5 are drawing shapes, the hundreds
/// are gate logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub enum Symbol {
    Reserv1,
    Oval,
    Diamond,
    House,
    CcfOval,
    Undefine,
    Or,
    And,
    Kn,
    Xor,
    Comment,
    Continuation,
}

impl Symbol {
    pub const ALL: [Symbol; 12] = [
        Symbol::Reserv1,
        Symbol::Oval,
        Symbol::Diamond,
        Symbol::House,
        Symbol::CcfOval,
        Symbol::Undefine,
        Symbol::Or,
        Symbol::And,
        Symbol::Kn,
        Symbol::Xor,
        Symbol::Comment,
        Symbol::Continuation,
    ];

    /// The persisted symbol code.
    pub const fn code(self) -> i16 {
        match self {
            Symbol::Reserv1 => 0,
            Symbol::Oval => 1,
            Symbol::Diamond => 2,
            Symbol::House => 3,
            Symbol::CcfOval => 4,
            Symbol::Undefine => 5,
            Symbol::Or => 100,
            Symbol::And => 200,
            Symbol::Kn => 300,
            Symbol::Xor => 400,
            Symbol::Comment => 500,
            Symbol::Continuation => 900,
        }
    }

    pub fn from_code(code: i16) -> Option<Symbol> {
        Symbol::ALL.into_iter().find(|symbol| symbol.code() == code)
    }
}

impl TryFrom<i16> for Symbol {
    type Error = String;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        Symbol::from_code(code).ok_or_else(|| format!("unknown symbol code {}", code))
    }
}

impl From<Symbol> for i16 {
    fn from(symbol: Symbol) -> i16 {
        symbol.code()
    }
}

/// An event record.
///
/// The payload is shared by all kinds; fields that only apply to some kinds
/// (symbol for gates, mean for basic events) are optional on the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub kind: EventKind,
    pub num: i32,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<i16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<Symbol>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<i16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<i16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calc_type: Option<i16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub init_enabled: Option<i16>,
    #[serde(default)]
    pub audit: AuditTrail,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<bool>,
}

impl Event {
    pub fn key(&self) -> EventKey {
        (self.kind.code(), self.num)
    }

    /// True for events drawn as an OR gate. Events with no symbol are not
    /// OR gates.
    pub fn is_or_gate(&self) -> bool {
        self.symbol == Some(Symbol::Or)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes_are_persisted_values() {
        assert_eq!(EventKind::BasicEvent.code(), 5);
        assert_eq!(EventKind::Gate.code(), 6);
        assert_eq!(EventKind::HouseEvent.code(), 7);
        assert_eq!(EventKind::ConsequenceEvent.code(), 8);
        assert_eq!(EventKind::TemplateEvent.code(), 9);
        assert_eq!(EventKind::InitiatingEvent.code(), 10);
        assert_eq!(EventKind::FunctionEvent.code(), 11);
        assert_eq!(EventKind::CcfEvent1.code(), 12);
        assert_eq!(EventKind::CcfEvent2.code(), 21);
    }

    #[test]
    fn test_symbol_codes_are_persisted_values() {
        assert_eq!(Symbol::Reserv1.code(), 0);
        assert_eq!(Symbol::Oval.code(), 1);
        assert_eq!(Symbol::Diamond.code(), 2);
        assert_eq!(Symbol::House.code(), 3);
        assert_eq!(Symbol::CcfOval.code(), 4);
        assert_eq!(Symbol::Undefine.code(), 5);
        assert_eq!(Symbol::Or.code(), 100);
        assert_eq!(Symbol::And.code(), 200);
        assert_eq!(Symbol::Kn.code(), 300);
        assert_eq!(Symbol::Xor.code(), 400);
        assert_eq!(Symbol::Comment.code(), 500);
        assert_eq!(Symbol::Continuation.code(), 900);
    }

    #[test]
    fn test_code_round_trip() {
        for kind in EventKind::ALL {
            assert_eq!(EventKind::from_code(kind.code()), Some(kind));
        }
        for symbol in Symbol::ALL {
            assert_eq!(Symbol::from_code(symbol.code()), Some(symbol));
        }
        assert_eq!(EventKind::from_code(99), None);
        assert_eq!(Symbol::from_code(150), None);
    }

    #[test]
    fn test_event_serializes_codes_not_names() {
        let event = Event {
            kind: EventKind::Gate,
            num: 42,
            id: "CCW-TOP".into(),
            text: None,
            tag: None,
            symbol: Some(Symbol::Or),
            model: None,
            state: None,
            calc_type: None,
            mean: None,
            init_enabled: None,
            audit: AuditTrail::default(),
            flag: None,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], 6);
        assert_eq!(json["symbol"], 100);
    }

    #[test]
    fn test_is_or_gate() {
        let mut event = Event {
            kind: EventKind::Gate,
            num: 1,
            id: "G1".into(),
            text: None,
            tag: None,
            symbol: Some(Symbol::And),
            model: None,
            state: None,
            calc_type: None,
            mean: None,
            init_enabled: None,
            audit: AuditTrail::default(),
            flag: None,
        };
        assert!(!event.is_or_gate());

        event.symbol = Some(Symbol::Or);
        assert!(event.is_or_gate());

        event.symbol = None;
        assert!(!event.is_or_gate());
    }
}
