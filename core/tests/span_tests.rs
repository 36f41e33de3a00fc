use crowjs::lexer::token::Span;
use crowjs::parser::ast::{Expr, ExprKind, Program, Stmt, StmtKind};

fn parse_program(source: &str) -> Program {
    let result = crowjs::parse(source);
    assert!(
        result.diagnostics.is_empty(),
        "unexpected diagnostics: {:?}",
        result.diagnostics
    );
    result.program.expect("program should parse")
}

fn slice(source: &str, span: Span) -> &str {
    &source[span.start..span.end]
}

#[test]
fn statement_spans_slice_the_source() {
    let source = "let x = 1;\nconsole.log(x);";
    let program = parse_program(source);
    assert_eq!(slice(source, program.body[0].span), "let x = 1;");
    assert_eq!(slice(source, program.body[1].span), "console.log(x);");
}

#[test]
fn leaf_spans_reconstruct_their_tokens() {
    let source = "let answer = compute(40, 2);";
    let program = parse_program(source);
    match &program.body[0].kind {
        StmtKind::VarDecl { declarations, .. } => {
            assert_eq!(slice(source, declarations[0].span), "answer = compute(40, 2)");
            let init = declarations[0].init.as_ref().expect("initializer");
            assert_eq!(slice(source, init.span), "compute(40, 2)");
            match &init.kind {
                ExprKind::Call { callee, args } => {
                    assert_eq!(slice(source, callee.span), "compute");
                    assert_eq!(slice(source, args[0].span), "40");
                    assert_eq!(slice(source, args[1].span), "2");
                }
                other => panic!("expected call, got {other:?}"),
            }
        }
        other => panic!("expected VarDecl, got {other:?}"),
    }
}

#[test]
fn binary_expression_spans_nest() {
    let source = "total = a + b * c;";
    let program = parse_program(source);
    match &program.body[0].kind {
        StmtKind::Expr(expr) => {
            assert_eq!(slice(source, expr.span), "total = a + b * c");
            match &expr.kind {
                ExprKind::Assign { value, .. } => {
                    assert_eq!(slice(source, value.span), "a + b * c");
                    match &value.kind {
                        ExprKind::Binary { left, right, .. } => {
                            assert_eq!(slice(source, left.span), "a");
                            assert_eq!(slice(source, right.span), "b * c");
                        }
                        other => panic!("expected binary, got {other:?}"),
                    }
                }
                other => panic!("expected assignment, got {other:?}"),
            }
        }
        other => panic!("expected expression statement, got {other:?}"),
    }
}

#[test]
fn every_node_contains_its_children() {
    let source = r#"
        function f(a, b = 2) {
            if (a > b) { return a; }
            for (let i = 0; i < b; i++) a += i;
            return `sum ${a + b}`;
        }
        class C extends D { m(x) { return new C(x); } }
    "#;
    let program = parse_program(source);
    for stmt in &program.body {
        assert!(program.span.contains(stmt.span));
        check_stmt(stmt);
    }
}

fn check_stmt(stmt: &Stmt) {
    match &stmt.kind {
        StmtKind::Expr(e) | StmtKind::Throw(e) => check_expr_within(stmt.span, e),
        StmtKind::VarDecl { declarations, .. } => {
            for decl in declarations {
                assert!(stmt.span.contains(decl.span));
                if let Some(init) = &decl.init {
                    check_expr_within(decl.span, init);
                }
            }
        }
        StmtKind::Block(body) => {
            for inner in body {
                assert!(stmt.span.contains(inner.span));
                check_stmt(inner);
            }
        }
        StmtKind::If {
            condition,
            then_branch,
            else_branch,
        } => {
            check_expr_within(stmt.span, condition);
            assert!(stmt.span.contains(then_branch.span));
            check_stmt(then_branch);
            if let Some(else_branch) = else_branch {
                assert!(stmt.span.contains(else_branch.span));
                check_stmt(else_branch);
            }
        }
        StmtKind::While { condition, body } | StmtKind::DoWhile { condition, body } => {
            check_expr_within(stmt.span, condition);
            assert!(stmt.span.contains(body.span));
            check_stmt(body);
        }
        StmtKind::ForLoop {
            init,
            condition,
            update,
            body,
        } => {
            if let Some(init) = init {
                assert!(stmt.span.contains(init.span));
                check_stmt(init);
            }
            if let Some(condition) = condition {
                check_expr_within(stmt.span, condition);
            }
            if let Some(update) = update {
                check_expr_within(stmt.span, update);
            }
            assert!(stmt.span.contains(body.span));
            check_stmt(body);
        }
        StmtKind::FunctionDecl(func) => {
            for param in &func.params {
                assert!(stmt.span.contains(param.span));
            }
            for inner in &func.body {
                assert!(stmt.span.contains(inner.span));
                check_stmt(inner);
            }
        }
        StmtKind::Class(class) => {
            if let Some(superclass) = &class.superclass {
                check_expr_within(stmt.span, superclass);
            }
            for method in &class.body {
                assert!(stmt.span.contains(method.span));
                for inner in &method.body {
                    assert!(method.span.contains(inner.span));
                    check_stmt(inner);
                }
            }
        }
        StmtKind::Return(value) => {
            if let Some(value) = value {
                check_expr_within(stmt.span, value);
            }
        }
        _ => {}
    }
}

fn check_expr_within(parent: Span, expr: &Expr) {
    assert!(
        parent.contains(expr.span),
        "{parent:?} should contain {:?}",
        expr.span
    );
    check_expr(expr);
}

fn check_expr(expr: &Expr) {
    match &expr.kind {
        ExprKind::Binary { left, right, .. } | ExprKind::Logical { left, right, .. } => {
            check_expr_within(expr.span, left);
            check_expr_within(expr.span, right);
            // siblings in source order
            assert!(left.span.start <= right.span.start);
        }
        ExprKind::Assign { target, value, .. } => {
            check_expr_within(expr.span, target);
            check_expr_within(expr.span, value);
        }
        ExprKind::Call { callee, args } | ExprKind::New { callee, args } => {
            check_expr_within(expr.span, callee);
            for arg in args {
                check_expr_within(expr.span, arg);
            }
        }
        ExprKind::Member { object, .. } => check_expr_within(expr.span, object),
        ExprKind::ComputedMember { object, property } => {
            check_expr_within(expr.span, object);
            check_expr_within(expr.span, property);
        }
        ExprKind::Unary { operand, .. } => check_expr_within(expr.span, operand),
        ExprKind::Update { target, .. } => check_expr_within(expr.span, target),
        ExprKind::Await(inner) => check_expr_within(expr.span, inner),
        ExprKind::TemplateLiteral { parts } => {
            for part in parts {
                if let crowjs::parser::ast::TemplatePart::Expression(inner) = part {
                    check_expr_within(expr.span, inner);
                }
            }
        }
        _ => {}
    }
}

#[test]
fn parsing_is_idempotent() {
    let source = r#"
        class Circle extends Shape {
          constructor(color, radius) { super(color); this.radius = radius; }
          getArea() { return Math.PI * this.radius * this.radius; }
        }
        for (let i = 0; i < 5; i++) console.log(i);
        let f = async (x) => await g(x);
    "#;
    let first = parse_program(source);
    let second = parse_program(source);
    assert_eq!(first, second);
}

#[test]
fn ast_serializes_to_json() {
    let program = parse_program("let x = [1, 2];");
    let json = serde_json::to_value(&program).expect("AST should serialize");
    let kind = &json["body"][0]["kind"];
    assert!(
        kind.get("VarDecl").is_some(),
        "unexpected serialized shape: {kind}"
    );
}
