// Host-side tests for configuration merging, parsing and the breakpoint.

use scroll_core::{Breakpoint, ConfigOverrides, EffectConfig, EffectError, EffectKind};

#[test]
fn defaults_match_documented_values() {
    let c = EffectConfig::default();
    assert_eq!(c.viewport_selector, None);
    assert_eq!(c.effect, EffectKind::Parallax);
    assert_eq!(c.parallax_max_offset, 100.0);
    assert_eq!(c.revealed_class, "js-reveal");
    assert_eq!(c.first_reveal_class, "js-revealed");
    assert!(c.auto_enable);
    assert!(!c.debug);
}

#[test]
fn overrides_replace_only_given_fields() {
    let c = EffectConfig::merged(ConfigOverrides {
        effect: Some(EffectKind::ScrollReveal),
        revealed_class: Some("shown".into()),
        auto_enable: Some(false),
        ..ConfigOverrides::default()
    });
    assert_eq!(c.effect, EffectKind::ScrollReveal);
    assert_eq!(c.revealed_class, "shown");
    assert!(!c.auto_enable);
    assert_eq!(c.first_reveal_class, "js-revealed");
    assert_eq!(c.parallax_max_offset, 100.0);
    assert!(!c.debug);
}

#[test]
fn empty_overrides_equal_defaults() {
    assert_eq!(
        EffectConfig::merged(ConfigOverrides::default()),
        EffectConfig::default()
    );
}

#[test]
fn effect_kind_parses_wire_names() {
    assert_eq!("parallax".parse::<EffectKind>().unwrap(), EffectKind::Parallax);
    assert_eq!(
        "scrollReveal".parse::<EffectKind>().unwrap(),
        EffectKind::ScrollReveal
    );
    assert_eq!(EffectKind::ScrollReveal.to_string(), "scrollReveal");
    assert_eq!(
        "fade".parse::<EffectKind>().unwrap_err(),
        EffectError::UnknownEffect("fade".into())
    );
}

#[test]
fn validate_rejects_bad_values() {
    let c = EffectConfig {
        parallax_max_offset: f64::NAN,
        ..EffectConfig::default()
    };
    assert!(matches!(c.validate(), Err(EffectError::InvalidConfig(_))));

    let c = EffectConfig {
        effect: EffectKind::ScrollReveal,
        first_reveal_class: "two words".into(),
        ..EffectConfig::default()
    };
    assert!(matches!(c.validate(), Err(EffectError::InvalidConfig(_))));

    let c = EffectConfig {
        effect: EffectKind::ScrollReveal,
        revealed_class: String::new(),
        ..EffectConfig::default()
    };
    assert!(c.validate().is_err());
    assert!(EffectConfig::default().validate().is_ok());
}

#[test]
fn breakpoint_is_inclusive() {
    let bp = Breakpoint::default();
    assert_eq!(bp.min_width, 900.0);
    assert!(bp.is_active(900.0));
    assert!(bp.is_active(1440.0));
    assert!(!bp.is_active(899.5));
    assert!(Breakpoint::new(0.0).is_active(0.0));
}
