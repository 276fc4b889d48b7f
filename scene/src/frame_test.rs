use super::*;

#[test]
fn new_slot_is_idle() {
    let slot = FrameSlot::<u32>::new();
    assert!(!slot.is_scheduled());
    assert!(!slot.has_pending());
}

#[test]
fn first_offer_requests_a_frame() {
    let mut slot = FrameSlot::new();
    assert!(slot.offer(1));
    assert!(slot.is_scheduled());
    assert!(slot.has_pending());
}

#[test]
fn offers_within_one_frame_request_only_once() {
    let mut slot = FrameSlot::new();
    assert!(slot.offer(1));
    assert!(!slot.offer(2));
    assert!(!slot.offer(3));
}

#[test]
fn take_returns_latest_offer() {
    let mut slot = FrameSlot::new();
    slot.offer(1);
    slot.offer(2);
    slot.offer(3);
    assert_eq!(slot.take(), Some(3));
    assert!(!slot.has_pending());
}

#[test]
fn take_rearms_scheduling() {
    let mut slot = FrameSlot::new();
    slot.offer(1);
    slot.take();
    assert!(!slot.is_scheduled());
    assert!(slot.offer(2));
}

#[test]
fn take_on_empty_slot_is_none_and_clears_schedule() {
    let mut slot = FrameSlot::<u32>::new();
    assert_eq!(slot.take(), None);
    assert!(!slot.is_scheduled());
}

#[test]
fn flush_takes_value_but_leaves_callback_outstanding() {
    let mut slot = FrameSlot::new();
    slot.offer(7);
    assert_eq!(slot.flush(), Some(7));
    assert!(slot.is_scheduled());
    assert_eq!(slot.take(), None);
}

#[test]
fn cancel_drops_pending_value() {
    let mut slot = FrameSlot::new();
    slot.offer(7);
    slot.cancel();
    assert!(!slot.has_pending());
    assert_eq!(slot.take(), None);
}
