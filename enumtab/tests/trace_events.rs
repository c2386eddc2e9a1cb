use std::io;
use std::sync::{Arc, Mutex};

use enumtab::{Enumeration, enum_cast_from_name, enum_cast_from_value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enumeration)]
enum Color {
    Red,
    Green,
    Blue,
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        let bytes = self.0.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut bytes) = self.0.lock() {
            bytes.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[enumtab_testhelpers::test]
fn lookups_emit_trace_events() {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        assert_eq!(enum_cast_from_name::<Color>("GREEN"), None);
        assert_eq!(enum_cast_from_name::<Color>("Blue"), Some(Color::Blue));
        assert_eq!(enum_cast_from_value::<Color>(7), None);
        assert_eq!(enum_cast_from_value::<Color>(u128::MAX), None);
    });

    let log = captured.text();
    assert!(log.contains("name lookup"), "{log}");
    assert!(log.contains(r#"type_name="Color""#), "{log}");
    assert!(log.contains(r#"name="Blue""#), "{log}");
    assert!(log.contains("hit=true"), "{log}");
    assert!(log.contains("value lookup"), "{log}");
    assert!(log.contains("value=7"), "{log}");
    assert!(log.contains("hit=false"), "{log}");
    assert!(log.contains("candidate is not representable"), "{log}");
}
