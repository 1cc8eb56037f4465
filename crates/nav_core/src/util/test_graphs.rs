use crate::{
    edge,
    graph::{Graph, Location},
};

/// The five-building campus map:
///
/// Gate ----100----> Library --30--> Lab --80--> Cafeteria
///   \                 |
///   200               50
///    \                |
///    Admin <---120---> Cafeteria
pub fn graph_campus() -> Graph {
    let mut g = Graph::with_capacity(5, 12);

    let gate = g.add_location(Location::new("Gate")).unwrap();
    let library = g.add_location(Location::new("Library")).unwrap();
    let admin = g.add_location(Location::new("Admin")).unwrap();
    let lab = g.add_location(Location::new("Lab")).unwrap();
    let cafeteria = g.add_location(Location::new("Cafeteria")).unwrap();

    g.add_edges(edge!(gate, library, 100)).unwrap();
    g.add_edges(edge!(library, lab, 30)).unwrap();
    g.add_edges(edge!(lab, cafeteria, 80)).unwrap();
    g.add_edges(edge!(gate, admin, 200)).unwrap();
    g.add_edges(edge!(library, admin, 50)).unwrap();
    g.add_edges(edge!(admin, cafeteria, 120)).unwrap();

    g
}

/// Two chains with no connection between them:
///
/// 0 -> 1 -> 2
/// 3 -> 4 -> 5
pub fn graph_two_yards() -> Graph {
    let mut g = Graph::new();

    let a = g.add_location(Location::new("A")).unwrap();
    let b = g.add_location(Location::new("B")).unwrap();
    let c = g.add_location(Location::new("C")).unwrap();
    let d = g.add_location(Location::new("D")).unwrap();
    let e = g.add_location(Location::new("E")).unwrap();
    let f = g.add_location(Location::new("F")).unwrap();

    g.add_edge(edge!(a => b, 1)).unwrap();
    g.add_edge(edge!(b => c, 1)).unwrap();
    g.add_edge(edge!(d => e, 3)).unwrap();
    g.add_edge(edge!(e => f, 1)).unwrap();

    g
}
