#![no_main]

use libfuzzer_sys::fuzz_target;
use resizekit_core::event::{KeyCode, KeyEvent, Modifiers};
use resizekit_core::shortcut::KeyCombo;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(combo) = KeyCombo::parse(input) else {
        return;
    };

    // A parsed combo always matches a press of itself.
    let event = KeyEvent::new(combo.code).with_modifiers(combo.modifiers);
    assert!(combo.matches(&event), "combo {input:?} rejects its own key");

    let _ = combo.matches(&KeyEvent::new(KeyCode::Enter));
    let _ = combo.matches(&KeyEvent::new(KeyCode::Escape).with_modifiers(Modifiers::all()));
});
