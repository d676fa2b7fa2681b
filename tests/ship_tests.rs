use salvo::{BoardError, Orientation, Ship};

#[test]
fn test_new_horizontal_and_vertical() -> Result<(), BoardError> {
    let ship = Ship::new(3, Orientation::Horizontal, 2, 1)?;
    let cells: Vec<_> = ship.cells().iter().collect();
    assert_eq!(cells, vec![12, 13, 14]);
    assert_eq!(ship.origin(), 12);

    let ship = Ship::new(4, Orientation::Vertical, 0, 0)?;
    let cells: Vec<_> = ship.cells().iter().collect();
    assert_eq!(cells, vec![0, 10, 20, 30]);
    assert!(!ship.contains(40));
    Ok(())
}

#[test]
fn test_new_out_of_bounds() {
    assert_eq!(
        Ship::new(5, Orientation::Horizontal, 6, 0).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(
        Ship::new(2, Orientation::Vertical, 0, 9).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
}

#[test]
fn test_from_cells() -> Result<(), BoardError> {
    let ship = Ship::from_cells(&[47, 27, 37])?;
    assert_eq!(ship.orientation(), Orientation::Vertical);
    assert_eq!(ship.origin(), 27);
    assert_eq!(ship.length(), 3);

    let ship = Ship::from_cells(&[5, 6])?;
    assert_eq!(ship.orientation(), Orientation::Horizontal);
    Ok(())
}

#[test]
fn test_from_cells_rejects_bad_shapes() {
    // wraps from the end of row 0 to the start of row 1
    assert_eq!(Ship::from_cells(&[9, 10]).unwrap_err(), BoardError::InvalidShape);
    // gap
    assert_eq!(Ship::from_cells(&[0, 2]).unwrap_err(), BoardError::InvalidShape);
    // diagonal
    assert_eq!(Ship::from_cells(&[0, 11]).unwrap_err(), BoardError::InvalidShape);
    // duplicate
    assert_eq!(Ship::from_cells(&[3, 3]).unwrap_err(), BoardError::InvalidShape);
    assert_eq!(Ship::from_cells(&[]).unwrap_err(), BoardError::InvalidShape);
    assert_eq!(
        Ship::from_cells(&[99, 100]).unwrap_err(),
        BoardError::IndexOutOfBounds(100)
    );
}

#[test]
fn test_register_hit_and_sunk() -> Result<(), BoardError> {
    let mut ship = Ship::new(2, Orientation::Horizontal, 1, 1)?;
    assert!(!ship.is_sunk());
    assert!(ship.register_hit(11));
    assert!(!ship.is_sunk());
    assert!(!ship.register_hit(0));
    assert!(ship.register_hit(12));
    assert!(ship.is_sunk());
    assert_eq!(ship.hits(), ship.length());
    // counter never exceeds the length
    assert!(!ship.register_hit(12));
    assert_eq!(ship.hits(), 2);
    Ok(())
}
