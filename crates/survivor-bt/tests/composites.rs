use survivor_bt::{BtNode, BtPolicy, BtStatus};

#[derive(Debug, Default)]
struct Counter {
    value: i32,
    visited: Vec<&'static str>,
}

fn increment(ctx: &mut Counter) -> BtStatus {
    ctx.value += 1;
    ctx.visited.push("increment");
    BtStatus::Success
}

fn decrement(ctx: &mut Counter) -> BtStatus {
    ctx.value -= 1;
    ctx.visited.push("decrement");
    BtStatus::Success
}

fn fail(ctx: &mut Counter) -> BtStatus {
    ctx.visited.push("fail");
    BtStatus::Failure
}

fn running(ctx: &mut Counter) -> BtStatus {
    ctx.visited.push("running");
    BtStatus::Running
}

fn is_positive(ctx: &mut Counter) -> bool {
    ctx.value > 0
}

#[test]
fn sequence_runs_all_children_on_success() {
    let tree = BtNode::sequence(vec![
        BtNode::action("increment", increment),
        BtNode::action("increment", increment),
    ]);
    let mut ctx = Counter::default();
    assert_eq!(tree.tick(&mut ctx), BtStatus::Success);
    assert_eq!(ctx.value, 2);
}

#[test]
fn sequence_stops_at_first_failure() {
    let tree = BtNode::sequence(vec![
        BtNode::action("increment", increment),
        BtNode::action("fail", fail),
        BtNode::action("increment", increment),
    ]);
    let mut ctx = Counter::default();
    assert_eq!(tree.tick(&mut ctx), BtStatus::Failure);
    assert_eq!(ctx.value, 1);
    assert_eq!(ctx.visited, vec!["increment", "fail"]);
}

#[test]
fn selector_stops_at_first_success() {
    let tree = BtNode::selector(vec![
        BtNode::action("fail", fail),
        BtNode::action("increment", increment),
        BtNode::action("decrement", decrement),
    ]);
    let mut ctx = Counter::default();
    assert_eq!(tree.tick(&mut ctx), BtStatus::Success);
    assert_eq!(ctx.value, 1);
    assert_eq!(ctx.visited, vec!["fail", "increment"]);
}

#[test]
fn selector_fails_when_all_children_fail() {
    let tree = BtNode::selector(vec![BtNode::action("fail", fail), BtNode::action("fail", fail)]);
    let mut ctx = Counter::default();
    assert_eq!(tree.tick(&mut ctx), BtStatus::Failure);
}

#[test]
fn running_propagates_through_both_composites() {
    let tree = BtNode::selector(vec![
        BtNode::sequence(vec![
            BtNode::action("increment", increment),
            BtNode::action("running", running),
            BtNode::action("increment", increment),
        ]),
        BtNode::action("decrement", decrement),
    ]);
    let mut ctx = Counter::default();
    assert_eq!(tree.tick(&mut ctx), BtStatus::Running);
    assert_eq!(ctx.visited, vec!["increment", "running"]);
}

#[test]
fn policy_remembers_last_status() {
    let mut policy = BtPolicy::new(BtNode::sequence(vec![
        BtNode::condition("is_positive", is_positive),
        BtNode::action("decrement", decrement),
    ]));
    let mut ctx = Counter {
        value: 1,
        ..Counter::default()
    };
    assert_eq!(policy.last_status(), None);

    assert_eq!(policy.tick(&mut ctx), BtStatus::Success);
    assert_eq!(policy.last_status(), Some(BtStatus::Success));

    assert_eq!(policy.tick(&mut ctx), BtStatus::Failure);
    assert_eq!(policy.last_status(), Some(BtStatus::Failure));
    assert_eq!(policy.root().node_count(), 3);
}
