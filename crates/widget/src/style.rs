use crate::host::HostPage;

/// Id of the page-level style block. Its presence is the injection guard.
pub const STYLE_ELEMENT_ID: &str = "trustable-widget-styles";

pub const STYLESHEET: &str = r#"
.trustable-widget {
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
  background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
  border-radius: 12px;
  padding: 20px;
  color: white;
  max-width: 300px;
  box-shadow: 0 4px 15px rgba(102, 126, 234, 0.3);
}
.trustable-widget-header { display: flex; align-items: center; gap: 8px; margin-bottom: 12px; }
.trustable-widget-logo { width: 24px; height: 24px; }
.trustable-widget-title { font-size: 14px; font-weight: 600; opacity: 0.9; }
.trustable-widget-brand { font-size: 18px; font-weight: 700; margin-bottom: 8px; }
.trustable-widget-score { font-size: 48px; font-weight: 800; line-height: 1; margin-bottom: 4px; }
.trustable-widget-rating {
  font-size: 14px;
  text-transform: uppercase;
  letter-spacing: 1px;
  opacity: 0.9;
  margin-bottom: 16px;
}
.trustable-widget-meter {
  background: rgba(255,255,255,0.3);
  border-radius: 10px;
  height: 8px;
  overflow: hidden;
  margin-bottom: 16px;
}
.trustable-widget-meter-fill {
  background: white;
  height: 100%;
  border-radius: 10px;
  transition: width 1s ease-out;
}
.trustable-widget-footer {
  display: flex;
  justify-content: space-between;
  align-items: center;
  font-size: 12px;
}
.trustable-widget-link { color: white; text-decoration: none; opacity: 0.9; }
.trustable-widget-link:hover { opacity: 1; text-decoration: underline; }
.trustable-widget-cta {
  background: white;
  color: #667eea;
  padding: 6px 12px;
  border-radius: 6px;
  text-decoration: none;
  font-weight: 600;
  font-size: 11px;
}
.trustable-widget-cta:hover { opacity: 0.9; }
.trustable-widget-loading { text-align: center; padding: 40px 20px; }
.trustable-widget-error { text-align: center; padding: 20px; opacity: 0.9; }
.trustable-widget-minimal {
  display: inline-flex;
  align-items: center;
  gap: 8px;
  background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
  padding: 8px 16px;
  border-radius: 20px;
  color: white;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  text-decoration: none;
}
.trustable-widget-minimal-score { font-weight: 700; font-size: 18px; }
.trustable-widget-minimal-label { font-size: 12px; opacity: 0.9; }
"#;

/// Inject the widget stylesheet unless the page already carries it.
///
/// Idempotent: the guard is the presence of [`STYLE_ELEMENT_ID`] on the page,
/// so any number of calls, from any number of initializers, leave exactly one
/// style block. Returns `true` only when this call injected it.
pub fn ensure_styles<P: HostPage + ?Sized>(page: &mut P) -> bool {
    if page.has_style(STYLE_ELEMENT_ID) {
        log::trace!("widget styles already present");
        return false;
    }
    page.inject_style(STYLE_ELEMENT_ID, STYLESHEET);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    #[test]
    fn test_inject_once() {
        let mut doc = Document::new();
        assert!(ensure_styles(&mut doc));
        assert!(!ensure_styles(&mut doc));
        assert!(!ensure_styles(&mut doc));
        assert_eq!(doc.style_count(STYLE_ELEMENT_ID), 1);
    }

    #[test]
    fn test_respects_preexisting_block() {
        // e.g. a second copy of the script tag already injected it
        let mut doc = Document::new();
        doc.inject_style(STYLE_ELEMENT_ID, "/* from elsewhere */");
        assert!(!ensure_styles(&mut doc));
        assert_eq!(doc.style_count(STYLE_ELEMENT_ID), 1);
    }

    #[test]
    fn test_stylesheet_covers_both_variants() {
        assert!(STYLESHEET.contains(".trustable-widget {"));
        assert!(STYLESHEET.contains(".trustable-widget-minimal {"));
        assert!(STYLESHEET.contains(".trustable-widget-meter-fill"));
    }
}
