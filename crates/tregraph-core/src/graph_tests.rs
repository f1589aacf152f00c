use crate::{GraphError, NodeId, QueryGraph, RelationDescriptor, RelationId, RelationKind};

fn triangle() -> (QueryGraph, [NodeId; 3]) {
    let mut g = QueryGraph::new();
    let a = g.create_node_with_pattern("A");
    let b = g.create_node_with_pattern("B");
    let c = g.create_node_with_pattern("C");
    (g, [a, b, c])
}

#[test]
fn first_node_becomes_head() {
    let mut g = QueryGraph::new();
    assert_eq!(g.head_node(), None);

    let a = g.create_node();
    let b = g.create_node();

    assert_eq!(g.head_node(), Some(a));
    assert!(g.is_head(a));
    assert!(!g.is_head(b));
    assert_eq!(g.node_count(), 2);
}

#[test]
fn set_head_node() {
    let (mut g, [_, b, _]) = triangle();
    g.set_head_node(b).unwrap();
    assert_eq!(g.head_node(), Some(b));

    let stranger = NodeId::from_raw(99);
    assert_eq!(
        g.set_head_node(stranger),
        Err(GraphError::UnknownNode(stranger))
    );
    assert_eq!(g.head_node(), Some(b));
}

#[test]
fn create_relation_defaults_to_descendant() {
    let (mut g, [a, b, _]) = triangle();
    let r = g.create_relation(a, b).unwrap();

    let rel = g.relation(r).unwrap();
    assert_eq!(rel.from(), a);
    assert_eq!(rel.to(), b);
    assert_eq!(rel.descriptor().kind(), RelationKind::Descendant);
    assert_eq!(g.node(a).unwrap().outgoing(), &[r]);
    assert_eq!(g.node(b).unwrap().incoming(), &[r]);
    assert!(g.has_relation_to(a, b));
    assert!(g.has_relation_from(b, a));
    assert!(!g.has_relation_to(b, a));
}

#[test]
fn create_relation_rejects_foreign_and_self() {
    let (mut g, [a, _, _]) = triangle();
    let stranger = NodeId::from_raw(42);

    assert_eq!(
        g.create_relation(a, stranger),
        Err(GraphError::UnknownNode(stranger))
    );
    assert_eq!(g.create_relation(a, a), Err(GraphError::SelfRelation(a)));
    assert_eq!(g.relation_count(), 0);
}

#[test]
fn delete_relation_detaches_endpoints() {
    let (mut g, [a, b, _]) = triangle();
    let r = g.create_relation(a, b).unwrap();

    let removed = g.delete_relation(r).unwrap();
    assert_eq!(removed.from(), a);
    assert!(g.node(a).unwrap().outgoing().is_empty());
    assert!(g.node(b).unwrap().incoming().is_empty());
    assert!(!g.contains_relation(r));
    assert_eq!(g.delete_relation(r), Err(GraphError::UnknownRelation(r)));
}

#[test]
fn delete_node_cascades_relations() {
    let (mut g, [a, b, c]) = triangle();
    let ab = g.create_relation(a, b).unwrap();
    let bc = g.create_relation(b, c).unwrap();
    let ac = g.create_relation(a, c).unwrap();

    g.delete_node(b).unwrap();

    assert!(!g.contains_node(b));
    assert!(!g.contains_relation(ab));
    assert!(!g.contains_relation(bc));
    assert_eq!(g.relation_count(), 1);
    assert_eq!(g.node(a).unwrap().outgoing(), &[ac]);
    assert_eq!(g.node(c).unwrap().incoming(), &[ac]);
}

#[test]
fn delete_head_requires_force() {
    let (mut g, [a, b, _]) = triangle();
    g.create_relation(a, b).unwrap();

    assert_eq!(g.delete_node(a), Err(GraphError::HeadNodeDeletion(a)));
    assert!(g.contains_node(a));
    assert_eq!(g.relation_count(), 1);

    g.force_delete_node(a).unwrap();
    assert_eq!(g.head_node(), Some(b));
    assert_eq!(g.relation_count(), 0);
}

#[test]
fn force_delete_last_node_leaves_headless_empty_graph() {
    let mut g = QueryGraph::new();
    let a = g.create_node();
    g.force_delete_node(a).unwrap();

    assert!(g.is_empty());
    assert_eq!(g.head_node(), None);

    let b = g.create_node();
    assert_eq!(g.head_node(), Some(b));
    assert_ne!(a, b);
}

#[test]
fn reverse_relation_replaces_identity() {
    let (mut g, [a, b, _]) = triangle();
    let descriptor = RelationDescriptor::new(RelationKind::NthChild).with_n(2);
    let r = g.create_relation_with(a, b, descriptor.clone()).unwrap();

    let reversed = g.reverse_relation(r).unwrap();

    assert_ne!(r, reversed);
    assert!(!g.contains_relation(r));
    let rel = g.relation(reversed).unwrap();
    assert_eq!((rel.from(), rel.to()), (b, a));
    assert_eq!(rel.descriptor(), &descriptor);
    assert_eq!(g.node(a).unwrap().incoming(), &[reversed]);
    assert!(g.node(a).unwrap().outgoing().is_empty());

    g.relation_mut(reversed)
        .unwrap()
        .descriptor_mut()
        .set_n(7);
    assert_eq!(descriptor.n(), 2);
}

#[test]
fn incident_relations_incoming_first() {
    let (mut g, [a, b, c]) = triangle();
    let out = g.create_relation(b, c).unwrap();
    let inc = g.create_relation(a, b).unwrap();

    assert_eq!(g.incident_relations(b).unwrap(), vec![inc, out]);
    assert_eq!(g.degree(b).unwrap(), 2);
    assert_eq!(g.degree(a).unwrap(), 1);
}

#[test]
fn clear_removes_everything() {
    let (mut g, [a, b, c]) = triangle();
    g.create_relation(a, b).unwrap();
    g.create_relation(c, b).unwrap();

    g.clear();

    assert!(g.is_empty());
    assert_eq!(g.relation_count(), 0);
    assert_eq!(g.head_node(), None);
    assert!(g.node(a).is_none());

    let fresh = g.create_node();
    assert_ne!(fresh, a);
    assert_ne!(fresh, c);
    assert_eq!(g.head_node(), Some(fresh));
    assert!(matches!(g.create_relation(fresh, b), Err(GraphError::UnknownNode(id)) if id == b));
}

#[test]
fn reachable_ignores_direction() {
    let (mut g, [a, b, c]) = triangle();
    let d = g.create_node_with_pattern("D");
    g.create_relation(a, b).unwrap();
    g.create_relation(c, b).unwrap();

    let reachable: Vec<_> = g.reachable_from(a).unwrap().into_iter().collect();
    assert_eq!(reachable, vec![a, b, c]);
    assert!(!g.reachable_from(a).unwrap().contains(&d));
}

#[test]
fn ids_display() {
    assert_eq!(NodeId::from_raw(3).to_string(), "N3");
    assert_eq!(RelationId::from_raw(0).to_string(), "R0");
}

#[test]
fn error_messages() {
    insta::assert_snapshot!(
        GraphError::HeadNodeDeletion(NodeId::from_raw(0)).to_string(),
        @"cannot delete head node N0 without force"
    );
    insta::assert_snapshot!(
        GraphError::SelfRelation(NodeId::from_raw(1)).to_string(),
        @"node N1 cannot be related to itself"
    );
}
