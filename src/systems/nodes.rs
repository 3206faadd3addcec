use crate::domain::Node;
use crate::render::DrawCommand;

use super::grid_lines::scrolled_row_y;
use super::{FrameContext, PopulationTally};

/// Age every node, drop the expired ones and draw the rest, then maybe spawn one.
pub fn update_nodes(nodes: &mut Vec<Node>, ctx: &mut FrameContext<'_>) -> PopulationTally {
    let mut tally = PopulationTally::default();

    nodes.retain_mut(|node| {
        node.tick();
        if !node.active {
            tally.expired += 1;
            return false;
        }
        draw_node(node, ctx);
        true
    });

    // Cap is checked before the draw so a full population consumes no randomness
    if nodes.len() < ctx.config.max_nodes && ctx.rng.chance(ctx.config.node_prob) {
        nodes.push(Node::spawn(ctx.rng, ctx.config, ctx.width, ctx.height));
        tally.spawned += 1;
    }

    tally
}

fn draw_node(node: &Node, ctx: &mut FrameContext<'_>) {
    let config = ctx.config;
    let x = node.grid_x as f64 * config.grid_size;
    let y = scrolled_row_y(config, node.grid_y, ctx.scroll_offset, ctx.height);
    ctx.draw(DrawCommand::Dot {
        center: (x, y),
        radius: config.node_radius,
        color: config.active_color,
        alpha: node.opacity(config.node_fade_ticks),
        glow: config.node_glow,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rng;
    use crate::domain::GridConfig;
    use crate::render::FrameRecorder;

    fn context<'a>(
        config: &'a GridConfig,
        rng: &'a mut Rng,
        surface: &'a mut FrameRecorder,
        scroll_offset: f64,
    ) -> FrameContext<'a> {
        FrameContext {
            config,
            width: 200.0,
            height: 100.0,
            scroll_offset,
            rng,
            surface,
            draw_calls: 0,
        }
    }

    #[test]
    fn node_scrolls_with_its_row() {
        let config = GridConfig {
            node_prob: 0.0,
            ..GridConfig::default()
        };
        let mut rng = Rng::new(1);
        let mut rec = FrameRecorder::new();
        let mut nodes = vec![Node::new(2, 2, 30.0)];

        let mut ctx = context(&config, &mut rng, &mut rec, 30.0);
        update_nodes(&mut nodes, &mut ctx);

        // row 2 -> 80 + 30 = 110 -> wraps to 10
        match &rec.commands()[0] {
            DrawCommand::Dot { center, alpha, .. } => {
                assert_eq!(*center, (80.0, 10.0));
                assert!((*alpha - 0.1).abs() < 1e-12);
            }
            other => panic!("expected a dot, got {other:?}"),
        }
    }

    #[test]
    fn expired_nodes_are_removed_and_not_drawn() {
        let config = GridConfig {
            node_prob: 0.0,
            ..GridConfig::default()
        };
        let mut rng = Rng::new(1);
        let mut rec = FrameRecorder::new();
        let mut old = Node::new(0, 0, 30.0);
        old.age = 30;
        let mut nodes = vec![old, Node::new(1, 1, 30.0)];

        let mut ctx = context(&config, &mut rng, &mut rec, 0.0);
        let tally = update_nodes(&mut nodes, &mut ctx);

        assert_eq!(tally.expired, 1);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].grid_x, 1);
        assert_eq!(rec.dot_count(), 1);
    }

    #[test]
    fn spawning_stops_at_the_cap() {
        let config = GridConfig {
            node_prob: 1.0,
            max_nodes: 3,
            node_life_min: 1000.0,
            ..GridConfig::default()
        };
        let mut rng = Rng::new(9);
        let mut rec = FrameRecorder::new();
        let mut nodes = Vec::new();

        for _ in 0..10 {
            let mut ctx = context(&config, &mut rng, &mut rec, 0.0);
            update_nodes(&mut nodes, &mut ctx);
            assert!(nodes.len() <= 3);
        }
        assert_eq!(nodes.len(), 3);
    }
}
