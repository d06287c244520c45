use datagenesis_orchestrator::{ProgressHub, RequestId};
use datagenesis_remote::ProgressEvent;

#[tokio::test]
async fn subscription_receives_events_until_terminal() {
    let hub = ProgressHub::default();
    let id = RequestId::new(1);
    hub.begin(id);
    let mut sub = hub.subscribe(id);

    assert!(hub.publish(id, ProgressEvent::new(10, "requesting_remote")));
    assert!(hub.publish(id, ProgressEvent::new(100, "done")));
    assert!(hub.publish(id, ProgressEvent::new(50, "after_terminal")));

    assert_eq!(sub.next().await.map(|e| e.progress), Some(10));
    assert_eq!(sub.next().await.map(|e| e.progress), Some(100));
    assert!(sub.next().await.is_none());
    assert!(sub.is_finished());
}

#[tokio::test]
async fn failure_event_is_terminal() {
    let hub = ProgressHub::default();
    let id = RequestId::new(3);
    hub.begin(id);
    let mut sub = hub.subscribe(id);

    hub.publish(id, ProgressEvent::failed("backend exploded"));
    let event = sub.next().await.expect("failure");
    assert!(event.is_failure());
    assert!(sub.next().await.is_none());
}

#[tokio::test]
async fn stale_request_cannot_publish() {
    let hub = ProgressHub::default();
    let old = RequestId::new(1);
    let new = RequestId::new(2);
    hub.begin(old);
    let mut old_sub = hub.subscribe(old);
    hub.begin(new);
    let mut new_sub = hub.subscribe(new);

    assert!(!hub.publish(old, ProgressEvent::new(40, "late")));
    assert!(old_sub.next().await.is_none());

    assert!(hub.publish(new, ProgressEvent::new(100, "done")));
    assert_eq!(new_sub.next().await.map(|e| e.progress), Some(100));
}

#[tokio::test]
async fn cancel_ends_open_subscriptions() {
    let hub = ProgressHub::default();
    let id = RequestId::new(9);
    hub.begin(id);
    let mut sub = hub.subscribe(id);

    hub.cancel();
    assert_eq!(hub.current(), None);
    assert!(sub.next().await.is_none());
}

#[tokio::test]
async fn closed_subscription_is_inert() {
    let hub = ProgressHub::default();
    let id = RequestId::new(4);
    hub.begin(id);
    let mut sub = hub.subscribe(id);
    sub.close();
    hub.publish(id, ProgressEvent::new(10, "requesting_remote"));
    assert!(sub.next().await.is_none());
}

#[tokio::test]
async fn tap_sees_events_for_every_request() {
    let hub = ProgressHub::default();
    let mut tap = hub.subscribe_all();

    hub.begin(RequestId::new(1));
    hub.publish(RequestId::new(1), ProgressEvent::new(10, "requesting_remote"));
    hub.begin(RequestId::new(2));
    hub.publish(RequestId::new(2), ProgressEvent::new(100, "done"));

    let (first, _) = tap.recv().await.expect("first");
    let (second, _) = tap.recv().await.expect("second");
    assert_eq!((first.get(), second.get()), (1, 2));
}
