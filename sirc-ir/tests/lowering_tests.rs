//! Session-level properties of register allocation and emission

use pretty_assertions::assert_eq;
use sirc_ir::{BinaryOperator, CodegenError, Emitter, IrType, RegisterAllocator, Session, Value};

#[test]
fn test_register_names_never_reused() {
    let mut session = Session::new();
    let mut seen = std::collections::HashSet::new();
    let mut last = session.allocate(IrType::I32).unwrap();
    seen.insert(last.to_string());

    for i in 0..200 {
        let op = [BinaryOperator::Add, BinaryOperator::Sub, BinaryOperator::Mul][i % 3];
        let next = session
            .lowering()
            .lower_binary(op, last.clone().into(), Value::Constant(i as i64))
            .unwrap();
        assert!(next.id() > last.id());
        assert!(seen.insert(next.to_string()));
        last = next;
    }
    assert_eq!(session.emitter().len(), 200);
}

#[test]
fn test_every_assignment_line_has_grammar_shape() {
    let mut session = Session::new();
    let a = session.allocate(IrType::I32).unwrap();
    session.emitter().open_block();
    let b = session.lowering().lower_token("+", a.clone().into(), Value::Constant(1)).unwrap();
    session.lowering().lower_token("-", b.into(), a.into()).unwrap();
    session.emitter().close_block();

    for line in session.render().lines() {
        if line == "{" || line == "}" {
            continue;
        }
        let (register, rhs) = line.split_once(" = ").unwrap();
        let ordinal = register.strip_prefix("%var").unwrap();
        assert!(ordinal.chars().all(|c| c.is_ascii_digit()));
        let (_, operands) = rhs.split_once(" i32 ").unwrap();
        assert_eq!(operands.split(", ").count(), 2);
    }
}

#[test]
fn test_reset_after_arbitrary_history() {
    let mut allocator = RegisterAllocator::new();
    let mut emitter = Emitter::new();
    for _ in 0..3 {
        emitter.open_block();
        let reg = allocator.allocate(IrType::I16).unwrap();
        emitter.assign(&reg, &Value::Constant(0)).unwrap();
        emitter.append_line("; filler");
    }

    allocator.reset();
    emitter.clear();

    assert_eq!(emitter.render(), "");
    assert_eq!(allocator.allocate(IrType::I32).unwrap().to_string(), "%var1");
}

#[test]
fn test_independent_sessions_do_not_interfere() {
    let mut first = Session::new();
    let mut second = Session::new();

    first.allocate(IrType::I32).unwrap();
    first.allocate(IrType::I32).unwrap();
    let reg = second.allocate(IrType::I32).unwrap();

    assert_eq!(reg.id(), 1);
    assert_eq!(first.allocator().count(), 2);
}

#[test]
fn test_prior_lines_survive_new_lowering() {
    let mut session = Session::new();
    let a = session.allocate(IrType::I32).unwrap();
    let b = session.allocate(IrType::I32).unwrap();
    session.emitter().append_line("; entry");

    session.lowering().lower_binary(BinaryOperator::Add, a.into(), b.into()).unwrap();

    assert_eq!(session.render(), "; entry\n%var3 = add nsw i32 %var1, %var2\n");
}

#[test]
fn test_error_display() {
    let err = CodegenError::OperandTypeMismatch {
        operand: "%var4".to_string(),
        expected: IrType::F32,
    };
    assert_eq!(err.to_string(), "Operand '%var4' does not have type float");
    assert_eq!(
        CodegenError::RegisterSpaceExhausted.to_string(),
        "Virtual register counter exhausted"
    );
}
