use crm_api::user::me;
use futures::FutureExt as _;
use futures::future::{AbortHandle, Abortable};

use crate::Error;
use crate::client::Client;
use crate::profile::Profile;

/// Access to the identity of whoever is signed in.
pub trait CurrentUser: Clone + 'static {
    fn fetch(&self) -> impl Future<Output = Result<Profile, Error>>;
}

impl CurrentUser for Client {
    fn fetch(&self) -> impl Future<Output = Result<Profile, Error>> {
        self.json(&me::Request)
    }
}

/// Builds the one-shot profile fetch of a shell mount.
///
/// `on_loaded` runs only when the fetch succeeds and the task was not aborted
/// beforehand. A failed fetch is logged once and otherwise ignored.
pub fn load<S: CurrentUser>(
    session: S,
    on_loaded: impl FnOnce(Profile) + 'static,
) -> (impl Future<Output = ()> + 'static, AbortHandle) {
    let (handle, registration) = AbortHandle::new_pair();
    let task = Abortable::new(
        async move {
            match session.fetch().await {
                Ok(profile) => on_loaded(profile),
                Err(error) => tracing::error!(current_user_fetch_error = %error),
            }
        },
        registration,
    );
    (task.map(|_| ()), handle)
}

#[cfg(test)]
#[coverage(off)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use fake::{Fake, Faker};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::{Context, SubscriberExt as _};

    use super::*;
    use crate::error;

    #[derive(Clone)]
    struct Mock {
        result: Result<Profile, Error>,
        fetches: Arc<AtomicUsize>,
    }

    impl Mock {
        fn new(result: Result<Profile, Error>) -> Self {
            Self { result, fetches: Arc::default() }
        }

        fn fetches(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    impl CurrentUser for Mock {
        async fn fetch(&self) -> Result<Profile, Error> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    struct ErrorCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for ErrorCounter {
        fn on_event(&self, event: &Event<'_>, _: Context<'_, S>) {
            if *event.metadata().level() == Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn unauthorized() -> Error {
        error::Http { code: 401, text: "Unauthorized".into() }.into()
    }

    #[tokio::test]
    async fn test_load_success() {
        let profile: Profile = Faker.fake();
        let session = Mock::new(Ok(profile.clone()));
        let loaded = Rc::new(RefCell::new(None));

        let (task, _handle) = load(session.clone(), {
            let loaded = loaded.clone();
            move |profile| *loaded.borrow_mut() = Some(profile)
        });
        task.await;

        assert_eq!(session.fetches(), 1);
        assert_eq!(loaded.borrow().as_ref(), Some(&profile));
    }

    #[tokio::test]
    async fn test_load_failure_logs_once() {
        let errors = Arc::new(AtomicUsize::new(0));
        let _guard = tracing::subscriber::set_default(
            tracing_subscriber::registry().with(ErrorCounter(errors.clone())),
        );

        let session = Mock::new(Err(unauthorized()));
        let loaded = Rc::new(RefCell::new(false));
        let (task, _handle) = load(session.clone(), {
            let loaded = loaded.clone();
            move |_| *loaded.borrow_mut() = true
        });
        task.await;

        assert_eq!(session.fetches(), 1);
        assert!(!*loaded.borrow());
        assert_eq!(errors.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_load_aborted() {
        let session = Mock::new(Ok(Faker.fake()));
        let loaded = Rc::new(RefCell::new(false));
        let (task, handle) = load(session.clone(), {
            let loaded = loaded.clone();
            move |_| *loaded.borrow_mut() = true
        });
        handle.abort();
        task.await;

        assert_eq!(session.fetches(), 0);
        assert!(!*loaded.borrow());
    }

    #[tokio::test]
    async fn test_load_each_mount() {
        let session = Mock::new(Ok(Faker.fake()));
        for mount in 1..=3 {
            let (task, _handle) = load(session.clone(), |_| {});
            task.await;
            assert_eq!(session.fetches(), mount);
        }
    }
}
