use crate::Coords;
use crate::config::{BOARD_HEIGHT_PX, BOARD_WIDTH_PX, CELL_SIZE, OFF_BOARD};
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Snake {
    // body[0] is the head
    body: Vec<Coords>,
    direction: Direction,
    // Direction of the last step taken, turns are checked against this one
    heading: Direction,
}

impl Snake {
    pub fn new(pos: Coords, direction: Direction) -> Self {
        Snake::from_segments(vec![pos], direction)
    }

    /// Builds a snake from explicit segment positions, head first.
    pub fn from_segments(body: Vec<Coords>, direction: Direction) -> Self {
        assert!(!body.is_empty(), "a snake needs at least a head");
        Snake { body, direction, heading: direction }
    }

    pub fn body(&self) -> &[Coords] {
        &self.body
    }

    pub fn head(&self) -> Coords {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    /// Requests a new direction. Reversing onto the neck is silently ignored.
    pub fn turn(&mut self, new_direction: Direction) {
        if new_direction != self.heading.opposite() {
            self.direction = new_direction;
        }
    }

    /// Appends a segment off the board; the next step pulls it in behind the tail.
    pub fn grow(&mut self) {
        self.body.push(OFF_BOARD);
    }

    /// Moves one cell forward, wrapping around the board edges.
    pub fn advance(&mut self) {
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }

        let (x, y) = self.body[0];
        self.body[0] = match self.direction {
            Up => (x, (y - CELL_SIZE).rem_euclid(BOARD_HEIGHT_PX)),
            Down => (x, (y + CELL_SIZE).rem_euclid(BOARD_HEIGHT_PX)),
            Left => ((x - CELL_SIZE).rem_euclid(BOARD_WIDTH_PX), y),
            Right => ((x + CELL_SIZE).rem_euclid(BOARD_WIDTH_PX), y),
        };
        self.heading = self.direction;
    }

    pub fn head_glyph(&self) -> [char; 2] {
        match self.direction {
            Up => ['^', '^'],
            Down => ['v', 'v'],
            Left => ['<', '█'],
            Right => ['█', '>'],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX_X: i32 = BOARD_WIDTH_PX - CELL_SIZE;
    const MAX_Y: i32 = BOARD_HEIGHT_PX - CELL_SIZE;

    fn straight_snake(len: i32) -> Snake {
        let body = (0..len).map(|i| (500 - i * CELL_SIZE, 300)).collect();
        Snake::from_segments(body, Right)
    }

    #[test]
    fn advance_preserves_length() {
        let mut snake = straight_snake(5);
        for dir in [Up, Left, Down, Down, Right].iter() {
            snake.turn(*dir);
            snake.advance();
            assert_eq!(snake.len(), 5);
        }
    }

    #[test]
    fn body_follows_the_head() {
        let mut snake = straight_snake(3);
        let before = snake.body().to_vec();

        snake.turn(Up);
        snake.advance();

        assert_eq!(snake.head(), (500, 275));
        assert_eq!(&snake.body()[1..], &before[..2]);
    }

    #[test]
    fn wraps_right_edge() {
        let mut snake = Snake::new((MAX_X, 100), Right);
        snake.advance();
        assert_eq!(snake.head(), (0, 100));
    }

    #[test]
    fn wraps_left_edge() {
        let mut snake = Snake::new((0, 100), Left);
        snake.advance();
        assert_eq!(snake.head(), (MAX_X, 100));
    }

    #[test]
    fn wraps_bottom_edge() {
        let mut snake = Snake::new((100, MAX_Y), Down);
        snake.advance();
        assert_eq!(snake.head(), (100, 0));
    }

    #[test]
    fn wraps_top_edge() {
        let mut snake = Snake::new((100, 0), Up);
        snake.advance();
        assert_eq!(snake.head(), (100, MAX_Y));
    }

    #[test]
    fn reverse_turn_is_ignored() {
        let mut snake = Snake::new((100, 100), Right);
        snake.turn(Left);
        assert_eq!(snake.get_direction(), Right);

        snake.turn(Down);
        assert_eq!(snake.get_direction(), Down);
    }

    #[test]
    fn two_turns_within_one_step_cannot_reverse() {
        let mut snake = straight_snake(4);
        snake.turn(Up);
        snake.turn(Left);
        assert_eq!(snake.get_direction(), Up);

        snake.advance();
        snake.turn(Left);
        assert_eq!(snake.get_direction(), Left);
    }

    #[test]
    fn grown_segment_waits_off_board() {
        let mut snake = straight_snake(2);
        let tail = snake.body()[1];

        snake.grow();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.body()[2], OFF_BOARD);

        snake.advance();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.body()[2], tail);
    }
}
