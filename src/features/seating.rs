//! Lecture hall seat map

use super::selection::SeatId;

/// Kind of seat, used for colouring and for the info card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatKind {
    Regular,
    Accessible,
    Reserved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seat {
    pub id: SeatId,
    pub kind: SeatKind,
}

impl Seat {
    pub fn is_selectable(&self) -> bool {
        self.kind != SeatKind::Reserved
    }
}

/// One row of seats facing the lecturer's desk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatRow {
    pub seats: Vec<Seat>,
    /// Index in `seats` before which an aisle is drawn
    pub aisle_before: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatMap {
    rows: Vec<SeatRow>,
}

impl SeatMap {
    /// Front row: eight seats, 2-4 accessible, 6-8 reserved, aisle after
    /// seat 4. Two rows of ten regular seats behind it.
    pub fn lecture_hall() -> Self {
        let front = (0..8u32)
            .map(|index| {
                let kind = match index {
                    1..=3 => SeatKind::Accessible,
                    5..=7 => SeatKind::Reserved,
                    _ => SeatKind::Regular,
                };
                seat(index + 1, kind)
            })
            .collect();

        let regular_row = |first: u32| SeatRow {
            seats: (first..first + 10)
                .map(|number| seat(number, SeatKind::Regular))
                .collect(),
            aisle_before: None,
        };

        Self {
            rows: vec![
                SeatRow {
                    seats: front,
                    aisle_before: Some(4),
                },
                regular_row(9),
                regular_row(19),
            ],
        }
    }

    pub fn rows(&self) -> &[SeatRow] {
        &self.rows
    }

    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.rows.iter().flat_map(|row| row.seats.iter())
    }

    pub fn find(&self, id: SeatId) -> Option<&Seat> {
        self.seats().find(|seat| seat.id == id)
    }

    /// Whether `id` exists and is not reserved
    pub fn can_select(&self, id: SeatId) -> bool {
        self.find(id).is_some_and(Seat::is_selectable)
    }

    pub fn is_accessible(&self, id: SeatId) -> bool {
        self.find(id)
            .is_some_and(|seat| seat.kind == SeatKind::Accessible)
    }
}

fn seat(number: u32, kind: SeatKind) -> Seat {
    Seat {
        // numbers are generated from 1 upwards
        id: SeatId::new(number).unwrap_or(SeatId::FIRST),
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u32) -> SeatId {
        SeatId::new(n).expect("non-zero seat")
    }

    #[test]
    fn test_layout_shape() {
        let map = SeatMap::lecture_hall();
        let lengths: Vec<usize> = map.rows().iter().map(|r| r.seats.len()).collect();
        assert_eq!(lengths, vec![8, 10, 10]);
        assert_eq!(map.rows()[0].aisle_before, Some(4));

        let numbers: Vec<u32> = map.seats().map(|s| s.id.get()).collect();
        assert_eq!(numbers, (1..=28).collect::<Vec<_>>());
    }

    #[test]
    fn test_front_row_kinds() {
        let map = SeatMap::lecture_hall();
        assert!(!map.is_accessible(id(1)));
        assert!(map.is_accessible(id(2)) && map.is_accessible(id(4)));
        assert!(map.can_select(id(5)));
        for reserved in 6..=8 {
            assert!(!map.can_select(id(reserved)), "seat {reserved} is reserved");
        }
    }

    #[test]
    fn test_unknown_seat() {
        let map = SeatMap::lecture_hall();
        assert!(map.find(id(29)).is_none());
        assert!(!map.can_select(id(29)));
        assert!(map.can_select(SeatId::FIRST));
    }
}
