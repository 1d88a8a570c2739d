use crate::constants::COLS;
use crate::game::shape::Shape;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceType {
    I, O, T, S, Z, L, J
}

impl PieceType {
    pub const ALL: [PieceType; 7] = [
        PieceType::I, PieceType::O, PieceType::T,
        PieceType::S, PieceType::Z, PieceType::L, PieceType::J,
    ];

    /// Color id stored in the board when this piece locks (index + 1).
    pub fn color(self) -> u8 {
        match self {
            PieceType::I => 1,
            PieceType::O => 2,
            PieceType::T => 3,
            PieceType::S => 4,
            PieceType::Z => 5,
            PieceType::L => 6,
            PieceType::J => 7,
        }
    }

    /// Freshly built spawn orientation. Every call returns an owned value,
    /// so rotating one piece can never affect another.
    pub fn shape(self) -> Shape {
        match self {
            PieceType::I => Shape::from_rows(&[&[1, 1, 1, 1]]),
            PieceType::O => Shape::from_rows(&[
                &[1, 1],
                &[1, 1],
            ]),
            PieceType::T => Shape::from_rows(&[
                &[1, 1, 1],
                &[0, 1, 0],
            ]),
            PieceType::S => Shape::from_rows(&[
                &[1, 1, 0],
                &[0, 1, 1],
            ]),
            PieceType::Z => Shape::from_rows(&[
                &[0, 1, 1],
                &[1, 1, 0],
            ]),
            PieceType::L => Shape::from_rows(&[
                &[1, 1, 1],
                &[1, 0, 0],
            ]),
            PieceType::J => Shape::from_rows(&[
                &[1, 1, 1],
                &[0, 0, 1],
            ]),
        }
    }
}

/// The active, player-controlled piece. `(x, y)` is the board position of
/// the top-left cell of the shape's bounding box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub piece_type: PieceType,
    pub shape: Shape,
    pub color: u8,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Piece at its spawn position: horizontally centred, top row at 0.
    pub fn new(piece_type: PieceType) -> Self {
        let shape = piece_type.shape();
        let x = (COLS / 2) as i32 - (shape.width() / 2) as i32;

        Self {
            piece_type,
            shape,
            color: piece_type.color(),
            x,
            y: 0,
        }
    }

    /// Board coordinates `(x, y)` of every occupied cell.
    pub fn get_blocks(&self) -> Vec<(i32, i32)> {
        self.shape
            .occupied()
            .map(|(r, c)| (self.x + c as i32, self.y + r as i32))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PIECE_COUNT;

    #[test]
    fn color_ids_cover_one_through_seven() {
        let colors: Vec<u8> = PieceType::ALL.iter().map(|p| p.color()).collect();
        assert_eq!(colors, (1..=PIECE_COUNT as u8).collect::<Vec<_>>());
    }

    #[test]
    fn four_rotations_restore_every_canonical_shape() {
        for piece_type in PieceType::ALL {
            let original = piece_type.shape();
            let mut shape = original.clone();
            for _ in 0..4 {
                shape = shape.rotate_clockwise();
            }
            assert_eq!(shape, original, "{:?} changed after four rotations", piece_type);
        }
    }

    #[test]
    fn every_canonical_shape_has_four_cells() {
        for piece_type in PieceType::ALL {
            assert_eq!(piece_type.shape().occupied().count(), 4, "{:?}", piece_type);
        }
    }

    #[test]
    fn spawn_position_is_centred() {
        assert_eq!(Piece::new(PieceType::I).x, 3);
        assert_eq!(Piece::new(PieceType::O).x, 4);
        assert_eq!(Piece::new(PieceType::T).x, 4);
        assert!(PieceType::ALL.iter().all(|&p| Piece::new(p).y == 0));
    }

    #[test]
    fn rotating_one_piece_leaves_template_alone() {
        let mut a = Piece::new(PieceType::L);
        let b = Piece::new(PieceType::L);
        a.shape = a.shape.rotate_clockwise();
        assert_ne!(a.shape, b.shape);
        assert_eq!(b.shape, PieceType::L.shape());
    }

    #[test]
    fn blocks_are_offset_by_position() {
        let mut piece = Piece::new(PieceType::O);
        piece.x = 2;
        piece.y = 5;
        assert_eq!(piece.get_blocks(), vec![(2, 5), (3, 5), (2, 6), (3, 6)]);
    }
}
