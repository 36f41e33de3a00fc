use crowjs::ErrorKind;
use crowjs::parser::ast::{ExprKind, Stmt, StmtKind, VarKind};

fn parse_clean(source: &str) -> Vec<Stmt> {
    let result = crowjs::parse(source);
    assert!(
        result.diagnostics.is_empty(),
        "unexpected diagnostics: {:?}",
        result.diagnostics
    );
    result.program.expect("program should parse").body
}

#[test]
fn parse_classic_for() {
    let stmts = parse_clean("for (let i = 0; i < 5; i++) console.log(i);");
    match &stmts[0].kind {
        StmtKind::ForLoop {
            init,
            condition,
            update,
            body,
        } => {
            assert!(matches!(
                init.as_ref().map(|s| &s.kind),
                Some(StmtKind::VarDecl { .. })
            ));
            assert!(matches!(
                condition.as_ref().map(|e| &e.kind),
                Some(ExprKind::Binary { .. })
            ));
            assert!(matches!(
                update.as_ref().map(|e| &e.kind),
                Some(ExprKind::Update { .. })
            ));
            // dangling body: a bare expression statement, no block required
            assert!(matches!(body.kind, StmtKind::Expr(_)));
        }
        other => panic!("expected ForLoop, got {other:?}"),
    }
}

#[test]
fn parse_for_with_expression_init() {
    let stmts = parse_clean("for (j = 0; j < i; j++) work(j);");
    match &stmts[0].kind {
        StmtKind::ForLoop { init, .. } => {
            assert!(matches!(
                init.as_ref().map(|s| &s.kind),
                Some(StmtKind::Expr(_))
            ));
        }
        other => panic!("expected ForLoop, got {other:?}"),
    }
}

#[test]
fn parse_for_with_empty_header() {
    let stmts = parse_clean("for (;;) { break; }");
    match &stmts[0].kind {
        StmtKind::ForLoop {
            init,
            condition,
            update,
            ..
        } => {
            assert!(init.is_none());
            assert!(condition.is_none());
            assert!(update.is_none());
        }
        other => panic!("expected ForLoop, got {other:?}"),
    }
}

#[test]
fn parse_for_of() {
    let stmts = parse_clean("for (let number of numbers) { console.log(number); }");
    match &stmts[0].kind {
        StmtKind::ForOf {
            decl_kind,
            variable,
            iterable,
            body,
        } => {
            assert_eq!(*decl_kind, Some(VarKind::Let));
            assert_eq!(variable, "number");
            assert!(matches!(iterable.kind, ExprKind::Identifier(ref n) if n == "numbers"));
            assert!(matches!(body.kind, StmtKind::Block(_)));
        }
        other => panic!("expected ForOf, got {other:?}"),
    }
}

#[test]
fn parse_for_of_without_declaration() {
    let stmts = parse_clean("for (x of xs) f(x);");
    assert!(matches!(
        stmts[0].kind,
        StmtKind::ForOf { decl_kind: None, .. }
    ));
}

#[test]
fn parse_for_in() {
    let stmts = parse_clean("for (const key in person) { console.log(key); }");
    match &stmts[0].kind {
        StmtKind::ForIn {
            decl_kind,
            variable,
            object,
            ..
        } => {
            assert_eq!(*decl_kind, Some(VarKind::Const));
            assert_eq!(variable, "key");
            assert!(matches!(object.kind, ExprKind::Identifier(_)));
        }
        other => panic!("expected ForIn, got {other:?}"),
    }
}

#[test]
fn for_of_iterable_may_be_a_call() {
    let stmts = parse_clean("for (item of getItems(a, b)) use(item);");
    match &stmts[0].kind {
        StmtKind::ForOf { iterable, .. } => {
            assert!(matches!(iterable.kind, ExprKind::Call { .. }));
        }
        other => panic!("expected ForOf, got {other:?}"),
    }
}

#[test]
fn in_operator_still_works_outside_for_headers() {
    let stmts = parse_clean("let found = key in obj;");
    match &stmts[0].kind {
        StmtKind::VarDecl { declarations, .. } => {
            assert!(matches!(
                declarations[0].init.as_ref().map(|e| &e.kind),
                Some(ExprKind::Binary { .. })
            ));
        }
        other => panic!("expected VarDecl, got {other:?}"),
    }
}

#[test]
fn parse_while() {
    let stmts = parse_clean("while (i < 5) i++;");
    match &stmts[0].kind {
        StmtKind::While { condition, body } => {
            assert!(matches!(condition.kind, ExprKind::Binary { .. }));
            assert!(matches!(body.kind, StmtKind::Expr(_)));
        }
        other => panic!("expected While, got {other:?}"),
    }
}

#[test]
fn parse_do_while_block() {
    let stmts = parse_clean("do { i++; } while (i < 5);");
    match &stmts[0].kind {
        StmtKind::DoWhile { body, condition } => {
            assert!(matches!(body.kind, StmtKind::Block(_)));
            assert!(matches!(condition.kind, ExprKind::Binary { .. }));
        }
        other => panic!("expected DoWhile, got {other:?}"),
    }
}

#[test]
fn parse_do_while_single_statement() {
    let stmts = parse_clean("do\n  console.log(i);\nwhile (i < 5);");
    match &stmts[0].kind {
        StmtKind::DoWhile { body, .. } => {
            assert!(matches!(body.kind, StmtKind::Expr(_)));
        }
        other => panic!("expected DoWhile, got {other:?}"),
    }
}

#[test]
fn parse_do_while_wrapping_a_for() {
    let stmts = parse_clean("do\n  for (j = 0; j < i; j++) console.log('X');\nwhile (i < 5);");
    match &stmts[0].kind {
        StmtKind::DoWhile { body, .. } => {
            assert!(matches!(body.kind, StmtKind::ForLoop { .. }));
        }
        other => panic!("expected DoWhile, got {other:?}"),
    }
}

#[test]
fn break_and_continue_inside_loops() {
    let result = crowjs::parse("for (;;) { if (done) break; continue; }");
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
}

#[test]
fn break_outside_loop_is_a_context_violation() {
    let result = crowjs::parse("break;");
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].kind, ErrorKind::ContextViolation);
}

#[test]
fn continue_outside_loop_is_a_context_violation() {
    let result = crowjs::parse("continue;");
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].kind, ErrorKind::ContextViolation);
}

#[test]
fn loop_context_does_not_leak_into_functions() {
    // a function body inside a loop resets break validity
    let result = crowjs::parse("while (x) { let f = function() { break; }; }");
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].kind, ErrorKind::ContextViolation);
}
