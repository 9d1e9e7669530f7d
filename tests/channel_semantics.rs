use fabric_channel::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

fn flags(p: &ChannelPeer) -> (bool, bool, bool, bool) {
    (p.endorsing_peer, p.chaincode_query, p.ledger_query, p.event_source)
}

#[test]
fn default_channel_carries_all_policy_defaults() {
    let c = generate_default_channel("mychannel");
    assert_eq!(c.key, "mychannel");
    assert!(c.orderers.is_empty());
    assert!(c.peers.is_empty());
    assert!(!c.is_simple());

    let q = c
        .polices
        .as_ref()
        .and_then(|p| p.query_channel_config.as_ref())
        .expect("query policy");
    assert_eq!(q.min_responses, 1);
    assert_eq!(q.max_targets, 1);
    let r = q.retry_opts.as_ref().expect("retry opts");
    assert_eq!(r.attempts, 5);
    assert_eq!(r.initial_backoff, "500ms");
    assert_eq!(r.max_backoff, "5s");
    assert_eq!(r.backoff_factor, "2.0");

    let s = c.selection.as_ref().expect("selection");
    assert_eq!(s.sorting_strategy, "BlockHeightPriority");
    assert_eq!(s.balancer, "RoundRobin");
    assert_eq!(s.block_height_lag_threshold, 5);

    let e = c.event_service.as_ref().expect("event service");
    assert_eq!(e.resolver_strategy, "PreferOrg");
    assert_eq!(e.min_block_height_resolver_mode, "ResolveByThreshold");
    assert_eq!(e.block_height_lag_threshold, 5);
    assert_eq!(e.reconnect_block_height_lag_threshold, 10);
    assert_eq!(e.peer_monitor, "Enabled");
    assert_eq!(e.peer_monitor_period, "5s");
}

#[test]
fn simple_channel_leaves_policies_unset() {
    let c = generate_simple_channel("bare");
    assert_eq!(c.key, "bare");
    assert!(c.orderers.is_empty());
    assert!(c.peers.is_empty());
    assert!(c.polices.is_none());
    assert!(c.selection.is_none());
    assert!(c.event_service.is_none());
    assert!(c.is_simple());
}

#[test]
fn absent_policy_differs_from_zero_valued_policy() {
    let mut c = generate_simple_channel("z");
    c.polices = Some(ChannelPolices {
        query_channel_config: None,
    });
    assert!(!c.is_simple());
    assert_ne!(c, generate_simple_channel("z"));
}

#[test]
fn default_and_endorsing_peers_differ_only_in_endorsement() {
    let d = generate_default_peer("peer0.org1");
    let e = generate_endorsing_peer("peer0.org1");
    assert_eq!(flags(&d), (false, true, true, true));
    assert_eq!(flags(&e), (true, true, true, true));
    assert_eq!(
        ChannelPeer {
            endorsing_peer: true,
            ..d
        },
        e
    );
}

#[test]
fn add_peer_twice_is_idempotent() {
    init_tracing();
    let mut c = generate_default_channel("ch");
    let p = generate_default_peer("p1");
    assert_eq!(c.add_peer(p.clone()), PeerUpsert::Inserted);
    assert_eq!(c.add_peer(p.clone()), PeerUpsert::Merged);
    assert_eq!(c.peers, vec![p]);
}

#[test]
fn merge_ors_every_flag_and_keeps_position() {
    let mut c = generate_simple_channel("ch");
    c.add_peer(generate_default_peer("a"));
    c.add_peer(ChannelPeer {
        key: "b".into(),
        endorsing_peer: false,
        chaincode_query: true,
        ledger_query: false,
        event_source: false,
    });
    c.add_peer(generate_default_peer("c"));

    let outcome = c.add_peer(ChannelPeer {
        key: "b".into(),
        endorsing_peer: true,
        chaincode_query: false,
        ledger_query: true,
        event_source: false,
    });
    assert_eq!(outcome, PeerUpsert::Merged);
    assert_eq!(c.peers.len(), 3);
    assert_eq!(c.peers[1].key, "b");
    assert_eq!(flags(&c.peers[1]), (true, true, true, false));
}

#[test]
fn merge_never_clears_flags() {
    let mut p = generate_endorsing_peer("x");
    p.merge(&ChannelPeer {
        key: "x".into(),
        ..ChannelPeer::default()
    });
    assert_eq!(flags(&p), (true, true, true, true));
}

#[test]
fn new_peers_append_in_order() {
    let mut c = generate_simple_channel("ch");
    for k in ["p3", "p1", "p2"] {
        assert_eq!(c.add_peer(generate_default_peer(k)), PeerUpsert::Inserted);
    }
    let keys: Vec<&str> = c.peers.iter().map(|p| p.key.as_str()).collect();
    assert_eq!(keys, ["p3", "p1", "p2"]);
}

#[test]
fn orderers_append_without_dedup() {
    let mut c = generate_default_channel("ch");
    c.add_orderer("orderer0:7050");
    c.add_orderer("orderer1:7050");
    c.add_orderer("orderer0:7050");
    assert_eq!(
        c.orderers,
        ["orderer0:7050", "orderer1:7050", "orderer0:7050"]
    );
}

#[test]
fn end_to_end_default_then_endorsing() {
    init_tracing();
    let mut c = generate_default_channel("ch1");
    c.add_peer(generate_default_peer("p1"));
    assert_eq!(c.peers.len(), 1);
    assert_eq!(flags(&c.peers[0]), (false, true, true, true));

    c.add_peer(generate_endorsing_peer("p1"));
    assert_eq!(c.peers.len(), 1);
    assert_eq!(c.peers[0].key, "p1");
    assert_eq!(flags(&c.peers[0]), (true, true, true, true));
}

#[test]
fn lookup_helpers() {
    let mut c = generate_simple_channel("ch");
    c.add_peer(generate_default_peer("q"));
    c.add_peer(generate_endorsing_peer("e1"));
    c.add_peer(generate_endorsing_peer("e2"));

    assert_eq!(c.peer("q"), Some(&generate_default_peer("q")));
    assert!(c.peer("missing").is_none());
    let endorsers: Vec<&str> = c.endorsing_peers().map(|p| p.key.as_str()).collect();
    assert_eq!(endorsers, ["e1", "e2"]);
}

#[test]
fn validate_accepts_upserted_config() {
    let mut c = generate_default_channel("ch");
    c.add_peer(generate_default_peer("p1"));
    c.add_peer(generate_endorsing_peer("p1"));
    c.add_peer(generate_default_peer("p2"));
    assert!(c.validate().is_ok());
}

#[test]
fn validate_rejects_hand_built_duplicates() {
    init_tracing();
    let mut c = generate_simple_channel("ch");
    c.peers = vec![generate_default_peer("dup"), generate_endorsing_peer("dup")];
    match c.validate() {
        Err(ChannelError::DuplicatePeer(k)) => assert_eq!(k, "dup"),
        other => panic!("expected DuplicatePeer, got {other:?}"),
    }
}

#[test]
fn validate_rejects_empty_keys() {
    assert!(matches!(
        generate_simple_channel("").validate(),
        Err(ChannelError::EmptyKey)
    ));

    let mut c = generate_simple_channel("ch");
    c.peers.push(generate_default_peer(""));
    let err = c.validate().unwrap_err();
    assert!(matches!(err, ChannelError::EmptyPeerKey));
    assert_eq!(err.to_string(), "channel peer key is empty");
}
