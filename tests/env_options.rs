//! `ERROR_HOLDER` is read once per process, so this binary holds a single
//! test that sets it before anything reads it.

use std::{borrow::Cow, cell::RefCell, rc::Rc};

use error_holder::{
    Channel, ErrorHolder, ErrorLevel, LeveledError, dispatch::LevelRouter,
    options::DispatchOptions,
};

#[derive(Clone, Debug)]
struct Sample(ErrorLevel);

impl LeveledError for Sample {
    fn type_name(&self) -> &str {
        "Sample"
    }

    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.0.as_str())
    }

    fn level(&self) -> ErrorLevel {
        self.0
    }
}

#[test]
fn test_env_threshold_applies_to_configured_routers() {
    // SAFETY: This is the only test in this binary, so no other thread reads
    // or writes the environment concurrently.
    unsafe { std::env::set_var(DispatchOptions::ENV_VAR, "level=error") };

    assert_eq!(
        DispatchOptions::get(),
        DispatchOptions {
            min_level: ErrorLevel::Error,
            quiet: false,
        }
    );

    let channels: Rc<RefCell<Vec<Channel>>> = Rc::default();
    let sink = {
        let channels = channels.clone();
        move |channel: Channel, _: &str| channels.borrow_mut().push(channel)
    };
    let router = LevelRouter::new(sink);
    assert_eq!(router.min_level(), ErrorLevel::Error);

    let mut holder: ErrorHolder = ErrorHolder::with_dispatcher(router);
    for level in ErrorLevel::ALL {
        holder.push_error(&Sample(level));
    }

    assert_eq!(holder.len(), ErrorLevel::ALL.len());
    assert_eq!(*channels.borrow(), [Channel::Error, Channel::Fatal]);

    // The value is cached, later changes are not picked up
    // SAFETY: See above.
    unsafe { std::env::set_var(DispatchOptions::ENV_VAR, "quiet") };
    assert!(!DispatchOptions::get().quiet);
}
