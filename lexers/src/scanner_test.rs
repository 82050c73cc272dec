use crate::scanner::Scanner;

#[test]
fn test_pushback() {
    let mut s = Scanner::new("ab".chars());
    assert_eq!(s.pos(), 0);
    assert_eq!(s.next(), Some('a'));
    assert_eq!(s.pos(), 1);
    s.push_back('a');
    assert_eq!(s.pos(), 0);
    assert_eq!(s.next(), Some('a'));
    assert_eq!(s.next(), Some('b'));
    assert_eq!(s.next(), None);
    assert_eq!(s.next(), None);
    assert_eq!(s.pos(), 2);
}

#[test]
fn test_peek() {
    let mut s = Scanner::new("xy".chars());
    assert_eq!(s.peek(), Some('x'));
    assert_eq!(s.peek(), Some('x'));
    assert_eq!(s.next(), Some('x'));
    assert_eq!(s.peek(), Some('y'));
    assert_eq!(s.next(), Some('y'));
    assert_eq!(s.peek(), None);
}

#[test]
fn test_accept() {
    let mut s = Scanner::new("heey  you!".chars());
    assert_eq!(s.accept_any(&['h', 'e']), Some('h'));
    assert_eq!(s.accept_any(&['h', 'e']), Some('e'));
    assert_eq!(s.accept_any(&['y']), None);
    assert_eq!(s.accept_any(&['e']), Some('e'));
    assert_eq!(s.accept_any(&['h', 'e', 'y']), Some('y'));
    assert!(s.skip_all(&[' ']));
    assert!(!s.skip_all(&[' ']));
    assert_eq!(s.pos(), 6);
    assert_eq!(s.next(), Some('y'));
}

#[test]
fn test_skips() {
    let mut s = Scanner::new("  \t\n42".chars());
    assert!(s.skip_all(&[' ', '\t', '\n']));
    assert_eq!(s.peek(), Some('4'));
    assert!(s.skip_all(&['1', '2', '3', '4']));
    assert_eq!(s.next(), None);
}
