use prim3d_math::Vec3;

use crate::buffer::GrowBuffer;
use crate::prim::{DepthKey, DrawPrimitive, PrimList, Vertex};

use super::{Context, DepthOrder};

/// Kinds in the order the sorted pass prefers them on equal depth.
const SORTED_KINDS: [DrawPrimitive; 3] = [DrawPrimitive::Lines, DrawPrimitive::Triangles, DrawPrimitive::Points];

impl Context {
    /// Builds the sorted-pass draw list from the sorted buffers.
    ///
    /// Called lazily by `draw`; calling it directly is only needed to inspect
    /// [`Context::sorted_runs`] before drawing.
    ///
    /// # Panics
    /// Panics while a primitive is in progress.
    pub fn sort(&mut self) {
        assert!(!self.is_building(), "sort() called between begin() and end()");
        let origin = self.app.view_origin;
        let sorted = &mut self.buffers[PrimList::Sorted.index()];

        for kind in DrawPrimitive::ALL {
            let keys = &mut self.sort_keys[kind.index()];
            depth_keys(sorted.get(kind), kind.vertex_count(), origin, keys);
        }

        self.sorted_runs.clear();
        match self.config.depth_order {
            DepthOrder::Buffered => {
                for kind in SORTED_KINDS {
                    self.sorted_runs.push(kind, 0, sorted.get(kind).len());
                }
            }
            DepthOrder::BackToFront => {
                for kind in DrawPrimitive::ALL {
                    let keys = &mut self.sort_keys[kind.index()];
                    keys.sort_unstable();
                    reorder(sorted.get_mut(kind), keys, kind.vertex_count(), &mut self.sort_scratch);
                }

                // Merge the per-kind sequences; each is already farthest-first.
                let mut heads = [0usize; 3];
                loop {
                    let mut next: Option<(DrawPrimitive, DepthKey)> = None;
                    for kind in SORTED_KINDS {
                        let Some(key) = self.sort_keys[kind.index()].get(heads[kind.index()]) else {
                            continue;
                        };
                        if next.is_none_or(|(_, best)| key.is_behind(&best)) {
                            next = Some((kind, *key));
                        }
                    }
                    let Some((kind, _)) = next else { break };

                    let n = kind.vertex_count();
                    let i = heads[kind.index()];
                    heads[kind.index()] += 1;
                    self.sorted_runs.push(kind, i * n, n);
                }
            }
        }

        self.sorted_runs.set_generation(self.generation);
        self.sort_called = true;

        log::debug!(
            "sorted pass: {} runs ({} points, {} lines, {} triangles)",
            self.sorted_runs.runs().len(),
            self.sort_keys[DrawPrimitive::Points.index()].len(),
            self.sort_keys[DrawPrimitive::Lines.index()].len(),
            self.sort_keys[DrawPrimitive::Triangles.index()].len(),
        );
    }
}

/// One key per primitive: squared distance from `origin` to the centroid.
fn depth_keys(vertices: &[Vertex], per_prim: usize, origin: Vec3, out: &mut Vec<DepthKey>) {
    out.clear();
    out.reserve(vertices.len() / per_prim);
    for (i, prim) in vertices.chunks_exact(per_prim).enumerate() {
        let mut centroid = Vec3::ZERO;
        for v in prim {
            centroid += v.position;
        }
        let centroid = centroid / per_prim as f32;
        out.push(DepthKey::new((centroid - origin).length_squared(), i as u32));
    }
}

/// Rewrites `buf` so primitive `i` is the one `keys[i]` refers to.
///
/// Renumbers `keys[i].order` to `i` afterwards.
fn reorder(buf: &mut GrowBuffer<Vertex>, keys: &mut [DepthKey], per_prim: usize, scratch: &mut GrowBuffer<Vertex>) {
    if keys.iter().enumerate().all(|(i, k)| k.order as usize == i) {
        return;
    }

    scratch.clear();
    scratch.reserve(buf.len());
    for (i, key) in keys.iter_mut().enumerate() {
        let start = key.order as usize * per_prim;
        scratch.extend_from_slice(&buf[start..start + per_prim]);
        key.order = i as u32;
    }
    std::mem::swap(buf, scratch);
}

#[cfg(test)]
mod tests {
    use prim3d_math::Color;

    use super::*;
    use crate::context::ContextConfig;
    use crate::prim::{DrawRun, PrimitiveMode};

    fn sorted_ctx(order: DepthOrder) -> Context {
        let mut ctx = Context::with_config(ContextConfig { depth_order: order, ..ContextConfig::default() });
        ctx.enable_sorting(true);
        ctx
    }

    fn point(ctx: &mut Context, z: f32) {
        ctx.begin(PrimitiveMode::Points);
        ctx.vertex(Vec3::new(0.0, 0.0, z), 1.0, Color::WHITE);
        ctx.end();
    }

    fn line(ctx: &mut Context, z: f32) {
        ctx.begin(PrimitiveMode::Lines);
        ctx.vertex(Vec3::new(-1.0, 0.0, z), 1.0, Color::WHITE);
        ctx.vertex(Vec3::new(1.0, 0.0, z), 1.0, Color::WHITE);
        ctx.end();
    }

    fn triangle(ctx: &mut Context, z: f32) {
        ctx.begin(PrimitiveMode::Triangles);
        ctx.vertex(Vec3::new(-1.0, 0.0, z), 1.0, Color::WHITE);
        ctx.vertex(Vec3::new(1.0, 0.0, z), 1.0, Color::WHITE);
        ctx.vertex(Vec3::new(0.0, 3.0, z), 1.0, Color::WHITE);
        ctx.end();
    }

    fn run(kind: DrawPrimitive, start: usize, count: usize) -> DrawRun {
        DrawRun { kind, start, count }
    }

    #[test]
    fn keys_use_centroids() {
        let verts = [
            Vertex::new(Vec3::new(0.0, 0.0, 2.0), 1.0, Color::WHITE),
            Vertex::new(Vec3::new(0.0, 0.0, 4.0), 1.0, Color::WHITE),
            Vertex::new(Vec3::new(0.0, 6.0, 0.0), 1.0, Color::WHITE),
        ];
        let mut keys = Vec::new();

        depth_keys(&verts[..2], 2, Vec3::ZERO, &mut keys);
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].distance_sq, 9.0);

        depth_keys(&verts, 3, Vec3::ZERO, &mut keys);
        // Centroid (0, 2, 2).
        assert_eq!(keys[0].distance_sq, 8.0);

        depth_keys(&verts, 1, Vec3::new(0.0, 0.0, 2.0), &mut keys);
        let d: Vec<f32> = keys.iter().map(|k| k.distance_sq).collect();
        assert_eq!(d, vec![0.0, 4.0, 40.0]);
    }

    #[test]
    fn back_to_front_reorders_within_a_kind() {
        let mut ctx = sorted_ctx(DepthOrder::BackToFront);
        for z in [1.0, 5.0, 3.0] {
            triangle(&mut ctx, z);
        }
        ctx.sort();

        let zs: Vec<f32> = ctx
            .buffer(PrimList::Sorted, DrawPrimitive::Triangles)
            .chunks_exact(3)
            .map(|t| t[0].position.z)
            .collect();
        assert_eq!(zs, vec![5.0, 3.0, 1.0]);
        assert_eq!(ctx.sorted_runs().runs(), &[run(DrawPrimitive::Triangles, 0, 9)]);
    }

    #[test]
    fn back_to_front_interleaves_kinds() {
        let mut ctx = sorted_ctx(DepthOrder::BackToFront);
        line(&mut ctx, 10.0);
        triangle(&mut ctx, 8.0);
        point(&mut ctx, 9.0);
        line(&mut ctx, 2.0);
        line(&mut ctx, 20.0);
        ctx.sort();

        // Lines sorted: z 20, 10, 2.
        assert_eq!(
            ctx.sorted_runs().runs(),
            &[
                run(DrawPrimitive::Lines, 0, 4),
                run(DrawPrimitive::Points, 0, 1),
                run(DrawPrimitive::Triangles, 0, 3),
                run(DrawPrimitive::Lines, 4, 2),
            ]
        );
    }

    #[test]
    fn farther_triangle_then_lines_before_points() {
        let mut ctx = sorted_ctx(DepthOrder::BackToFront);
        point(&mut ctx, 4.0);
        triangle(&mut ctx, 4.0);
        line(&mut ctx, 4.0);
        ctx.app_data_mut().view_origin = Vec3::new(0.0, 0.0, 100.0);
        ctx.sort();

        let kinds: Vec<DrawPrimitive> = ctx.sorted_runs().runs().iter().map(|r| r.kind).collect();
        // Triangle centroid sits at y = 1, so it is farther than the line.
        assert_eq!(kinds, vec![DrawPrimitive::Triangles, DrawPrimitive::Lines, DrawPrimitive::Points]);
    }

    #[test]
    fn equal_depth_prefers_lines_over_triangles() {
        let mut ctx = sorted_ctx(DepthOrder::BackToFront);
        // Degenerate triangle with its centroid on the line midpoint.
        ctx.begin(PrimitiveMode::Triangles);
        ctx.vertex(Vec3::new(-1.0, 0.0, 6.0), 1.0, Color::WHITE);
        ctx.vertex(Vec3::new(1.0, 0.0, 6.0), 1.0, Color::WHITE);
        ctx.vertex(Vec3::new(0.0, 0.0, 6.0), 1.0, Color::WHITE);
        ctx.end();
        line(&mut ctx, 6.0);
        ctx.sort();

        assert_eq!(
            ctx.sorted_runs().runs(),
            &[run(DrawPrimitive::Lines, 0, 2), run(DrawPrimitive::Triangles, 0, 3)]
        );
    }

    #[test]
    fn buffered_keeps_emission_order_and_whole_buffers() {
        let mut ctx = sorted_ctx(DepthOrder::Buffered);
        triangle(&mut ctx, 1.0);
        triangle(&mut ctx, 5.0);
        point(&mut ctx, 3.0);
        line(&mut ctx, 2.0);
        ctx.sort();

        assert_eq!(
            ctx.sorted_runs().runs(),
            &[
                run(DrawPrimitive::Lines, 0, 2),
                run(DrawPrimitive::Triangles, 0, 6),
                run(DrawPrimitive::Points, 0, 1),
            ]
        );
        let zs: Vec<f32> = ctx
            .buffer(PrimList::Sorted, DrawPrimitive::Triangles)
            .chunks_exact(3)
            .map(|t| t[0].position.z)
            .collect();
        assert_eq!(zs, vec![1.0, 5.0]);
    }

    #[test]
    fn empty_sorted_buffers_produce_no_runs() {
        let mut ctx = sorted_ctx(DepthOrder::Buffered);
        ctx.sort();
        assert!(ctx.sorted_runs().is_empty());
        assert!(ctx.is_sorted());
    }

    #[test]
    fn immediate_geometry_is_not_sorted() {
        let mut ctx = Context::new();
        triangle(&mut ctx, 1.0);
        triangle(&mut ctx, 5.0);
        ctx.sort();
        assert!(ctx.sorted_runs().is_empty());
        let first = ctx.buffer(PrimList::Immediate, DrawPrimitive::Triangles)[0];
        assert_eq!(first.position.z, 1.0);
    }
}
