//! # Validation Tier Tests (T0-T3)
//!
//! If ANY tier fails, the format layer is INVALID.
//!
//! ## Tiers
//! - T0: Literal Integrity
//! - T1: Rule Identity
//! - T2: Knowledge Base Text Form
//! - T3: Exchange Form

use prudens_core::{
    KnowledgeBase, KnowledgeBaseObject, Literal, LiteralObject, PrudensError, Rule, RuleName,
};

// =============================================================================
// TIER T0: LITERAL INTEGRITY
// =============================================================================

mod t0_literal_integrity {
    use super::*;

    /// T0.1: A leading `-` is the sign, never part of the name.
    #[test]
    fn sign_is_positional() {
        assert_eq!(Literal::parse("-a"), Literal::negative("a"));
        assert_eq!(Literal::parse("a"), Literal::positive("a"));
    }

    /// T0.2: Exchange metadata is always emitted at its defaults.
    #[test]
    fn metadata_defaults() {
        let object = Literal::parse("-a").to_object();
        assert!(!object.is_js && !object.is_equality && !object.is_inequality && !object.is_action);
        assert_eq!(object.arity, 0);
    }
}

// =============================================================================
// TIER T1: RULE IDENTITY
// =============================================================================

mod t1_rule_identity {
    use super::*;

    /// T1.1: Body order does not affect identity.
    #[test]
    fn body_order_ignored() {
        assert_eq!(Rule::new(["a", "b"], "c"), Rule::new(["b", "a"], "c"));
    }

    /// T1.2: Different body members are different rules.
    #[test]
    fn body_members_matter() {
        assert_ne!(Rule::new(["a", "b"], "c"), Rule::new(["a", "c"], "c"));
    }

    /// T1.3: Parsing a rendered rule reproduces the rule for any name.
    #[test]
    fn render_parse_roundtrip() {
        let rule = Rule::new(["x1", "-y2", "z"], "-w");
        for name in [RuleName::Default, RuleName::Index(12), RuleName::Text("named")] {
            let parsed = Rule::parse(&rule.render(name)).expect("parse");
            assert_eq!(parsed, rule);
            assert_eq!(parsed.body(), rule.body());
        }
    }

    /// T1.4: A statement without `implies` is rejected.
    #[test]
    fn missing_implies_rejected() {
        let result = Rule::parse("R1 :: a, b");
        assert!(matches!(result, Err(PrudensError::MalformedRule(_))));
    }
}

// =============================================================================
// TIER T2: KNOWLEDGE BASE TEXT FORM
// =============================================================================

mod t2_text_form {
    use super::*;

    /// T2.1: The canonical single-rule example.
    #[test]
    fn canonical_example() {
        let kb = KnowledgeBase::parse("@KnowledgeBase R1 :: a, -b implies c;").expect("parse");
        assert_eq!(kb.to_string(), "@KnowledgeBase\nR1 :: a, -b implies c;");
    }

    /// T2.2: Rendering an all-active knowledge base and parsing it back is exact.
    #[test]
    fn all_active_roundtrip() {
        let kb = KnowledgeBase::from_rules(vec![
            Rule::new(["a"], "b"),
            Rule::new(["b", "-c"], "d"),
            Rule::new(["true"], "e"),
        ]);
        assert_eq!(KnowledgeBase::parse(&kb.render("\n")).expect("parse"), kb);
    }

    /// T2.3: With inactive rules, the parsed render is the active subsequence.
    #[test]
    fn inactive_rules_dropped_on_roundtrip() {
        let kb = KnowledgeBase::from_rules(vec![
            Rule::new(["a"], "b").with_active(false),
            Rule::new(["c"], "d"),
        ]);
        let parsed = KnowledgeBase::parse(&kb.render("\n")).expect("parse");
        assert_eq!(parsed, KnowledgeBase::from_rules(vec![Rule::new(["c"], "d")]));
    }

    /// T2.4: Text without the marker is not a knowledge base.
    #[test]
    fn missing_marker_rejected() {
        let result = KnowledgeBase::parse("KnowledgeBase R1 :: a implies b;");
        assert_eq!(result, Err(PrudensError::MalformedKnowledgeBase));
    }

    /// T2.5: Full context spans inactive rules too.
    #[test]
    fn full_context_includes_inactive() {
        let kb = KnowledgeBase::from_rules(vec![
            Rule::new(["b"], "x"),
            Rule::new(["-a"], "y").with_active(false),
        ]);
        assert_eq!(kb.full_context(), vec!["a", "b"]);
    }
}

// =============================================================================
// TIER T3: EXCHANGE FORM
// =============================================================================

mod t3_exchange_form {
    use super::*;
    use serde_json::json;

    /// T3.1: Exported JSON has the engine's exact shape.
    #[test]
    fn exported_shape() {
        let kb = KnowledgeBase::parse("@KnowledgeBase R1 :: -a implies b;").expect("parse");
        let value = serde_json::to_value(kb.to_object()).expect("serialize");

        let literal = |name: &str, sign: bool| {
            json!({
                "name": name, "sign": sign, "isJS": false, "isEquality": false,
                "isInequality": false, "isAction": false, "arity": 0
            })
        };
        assert_eq!(
            value,
            json!({
                "type": "output",
                "kb": [{"name": "R1", "body": [literal("a", false)], "head": literal("b", true)}],
                "imports": "",
                "warnings": []
            })
        );
    }

    /// T3.2: Exchange rule names are ignored on import.
    #[test]
    fn rule_names_ignored() {
        let object = KnowledgeBaseObject::new(vec![prudens_core::RuleObject {
            name: "anything".to_string(),
            body: vec![LiteralObject::new("a", false)],
            head: LiteralObject::new("b", true),
        }]);
        let kb = KnowledgeBase::from_object(&object);
        assert_eq!(kb.render("\n"), "@KnowledgeBase\nR1 :: -a implies b;");
    }

    /// T3.3: Objects missing required fields are rejected.
    #[test]
    fn missing_fields_rejected() {
        let result = KnowledgeBase::from_json(r#"{"type": "output"}"#);
        assert!(matches!(result, Err(PrudensError::MalformedObject(_))));

        let result = Rule::from_json(r#"{"name": "R1", "head": {"name": "a", "sign": true}}"#);
        assert!(matches!(result, Err(PrudensError::MalformedObject(_))));
    }
}
