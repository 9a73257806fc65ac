#![cfg(not(feature = "hydrate"))]

use std::future::Future;
use std::task::{Context, Poll};

use futures::channel::oneshot;

use super::*;

#[test]
fn toast_stays_until_its_timer_fires() {
    let toasts = RwSignal::new(ToastState::default());
    push_toast_for(toasts, "Saved", ToastKind::Success, 50);
    let id = toasts.with_untracked(|t| t.items[0].id);

    let (fire, timer) = oneshot::channel::<()>();
    let mut expiry = Box::pin(expire_after(toasts, id, async move {
        let _ = timer.await;
    }));
    let waker = futures::task::noop_waker();
    let mut cx = Context::from_waker(&waker);

    assert!(expiry.as_mut().poll(&mut cx).is_pending());
    assert_eq!(toasts.with_untracked(|t| t.items.len()), 1);

    fire.send(()).unwrap();
    assert_eq!(expiry.as_mut().poll(&mut cx), Poll::Ready(true));
    assert!(toasts.with_untracked(|t| t.items.is_empty()));
}

#[test]
fn expiry_only_removes_its_own_toast() {
    let toasts = RwSignal::new(ToastState::default());
    push_toast(toasts, "first", ToastKind::Info);
    push_toast(toasts, "second", ToastKind::Error);
    let first = toasts.with_untracked(|t| t.items[0].id);

    assert!(futures::executor::block_on(expire_after(toasts, first, async {})));
    let left: Vec<String> = toasts.with_untracked(|t| t.items.iter().map(|x| x.message.clone()).collect());
    assert_eq!(left, vec!["second".to_owned()]);

    // Already dismissed by hand: the timer finds nothing to remove.
    assert!(!futures::executor::block_on(expire_after(toasts, first, async {})));
}
