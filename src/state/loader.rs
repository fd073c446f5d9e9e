//! Remote Collection Loader
//!
//! Mount-scoped fetch with fallback. Every management view triggers exactly
//! one load when it mounts; on failure the view silently degrades to its
//! fallback dataset and the error goes to the console only. The UI never
//! renders an empty or error state for these views.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use leptos::*;

/// Resolve a fetch outcome into the value to install, plus the diagnostic
/// to log when the fallback was substituted.
pub(crate) fn settle<T>(
    outcome: Result<T, String>,
    fallback: T,
    resource: &str,
) -> (T, Option<String>) {
    match outcome {
        Ok(value) => (value, None),
        Err(err) => (fallback, Some(format!("Error fetching {}: {}", resource, err))),
    }
}

/// Kick off the single on-mount load for a view.
///
/// `data` receives either the live payload or the fallback dataset, and
/// `loading` is cleared afterwards - in both outcomes, never before the
/// value is in place. A liveness token tied to the component's owner turns
/// a response that arrives after unmount into a no-op instead of a write
/// to disposed signals.
pub fn load_on_mount<T, Fut>(
    fetch: impl Fn() -> Fut + 'static,
    fallback: impl Fn() -> T + 'static,
    resource: &'static str,
    data: RwSignal<T>,
    loading: RwSignal<bool>,
) where
    T: 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let alive = Rc::new(Cell::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.set(false));
    }

    create_effect(move |_| {
        let request = fetch();
        let fallback = fallback();
        let alive = alive.clone();
        spawn_local(async move {
            let (value, diagnostic) = settle(request.await, fallback, resource);
            if let Some(message) = diagnostic {
                web_sys::console::error_1(&message.into());
            }
            if !alive.get() {
                return;
            }
            data.set(value);
            loading.set(false);
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_fetch_installs_payload_verbatim() {
        let (value, diagnostic) = settle(Ok(vec![1, 2, 3]), vec![9], "players");
        assert_eq!(value, vec![1, 2, 3]);
        assert!(diagnostic.is_none());
    }

    #[test]
    fn failed_fetch_installs_fallback_with_one_diagnostic() {
        let (value, diagnostic) = settle(
            Err("Network error: timeout".to_string()),
            vec![9],
            "players",
        );
        assert_eq!(value, vec![9]);
        assert_eq!(
            diagnostic.as_deref(),
            Some("Error fetching players: Network error: timeout")
        );
    }

    #[test]
    fn diagnostic_names_the_resource() {
        let (_, diagnostic) = settle::<Vec<u32>>(
            Err("Server error: status 502".to_string()),
            Vec::new(),
            "guilds",
        );
        assert!(diagnostic.unwrap().starts_with("Error fetching guilds:"));
    }
}
