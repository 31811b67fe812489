/////////////////////////////TESTS////////////////////////////////////////////////////
/*
tests:
title/key/value primitives
ordered multi-section document
comment filtering
section -> function mapping for every kind
malformed documents and bad keys
File-based parsing test
*/

#[cfg(test)]
mod tests1 {

    use crate::Utils::task_parser::{
        Value, filter_comments, parse_document, parse_document_complete, parse_key,
        parse_key_value_pair, parse_section, parse_task_document, parse_task_file, parse_title,
        parse_value, parse_value_list,
    };
    use crate::symbolic::calculus_errors::CalculusError;
    use crate::symbolic::elementary::ElementaryOps;
    use crate::symbolic::fraction::Fraction;
    use std::io::Write;

    #[test]
    fn test_parse_title() {
        let (remaining, title) = parse_title("f1\n kind: power").unwrap();
        assert_eq!(title, "f1");
        assert_eq!(remaining, "kind: power");

        let (remaining, title) = parse_title("cos_task kind: cos").unwrap();
        assert_eq!(title, "cos_task");
        assert_eq!(remaining, "kind: cos");
    }

    #[test]
    fn test_parse_key() {
        let (remaining, key) = parse_key("coeff: 1/2").unwrap();
        assert_eq!(key, "coeff");
        assert_eq!(remaining, ": 1/2");
        assert!(parse_key("1a: 2").is_err());
    }

    #[test]
    fn test_parse_value() {
        let (_, value) = parse_value("42").unwrap();
        assert_eq!(value, Value::Integer(42));

        let (remaining, value) = parse_value("-1/3 b: 2").unwrap();
        assert_eq!(value, Value::Rational(Fraction::new(-1, 3).unwrap()));
        assert_eq!(remaining, " b: 2");

        let (_, value) = parse_value("0.25").unwrap();
        assert_eq!(value, Value::Float(0.25));
        assert_eq!(value.to_fraction().unwrap(), Fraction::new(1, 4).unwrap());

        let (_, value) = parse_value("true").unwrap();
        assert_eq!(value, Value::Boolean(true));

        let (_, value) = parse_value("\\theta").unwrap();
        assert_eq!(value, Value::String("\\theta".to_string()));
        assert!(value.to_fraction().is_err());
    }

    #[test]
    fn test_parse_value_list() {
        let (_, values) = parse_value_list("1, 2 ,3").unwrap();
        assert_eq!(
            values,
            vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]
        );
    }

    #[test]
    fn test_parse_key_value_pair() {
        let (remaining, (key, values)) = parse_key_value_pair("a : 2 b: 1").unwrap();
        assert_eq!(key, "a");
        assert_eq!(values, vec![Value::Integer(2)]);
        assert_eq!(remaining, "b: 1");
    }

    #[test]
    fn test_parse_section() {
        let (remaining, (title, section)) =
            parse_section("f1\nkind: power a: 2 n: 3\ng\nkind: cos").unwrap();
        assert_eq!(title, "f1");
        assert_eq!(section.len(), 3);
        assert_eq!(
            section[0],
            ("kind".to_string(), vec![Value::String("power".to_string())])
        );
        assert_eq!(section[2], ("n".to_string(), vec![Value::Integer(3)]));
        assert_eq!(remaining, "g\nkind: cos");
    }

    #[test]
    fn test_parse_document_keeps_order() {
        let input = "zeta\nkind: sin\nalpha\nkind: cos\nmid\nkind: ln b: 2";
        let (remaining, document) = parse_document(input).unwrap();
        assert!(remaining.is_empty());
        let titles: Vec<&str> = document.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(titles, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_filter_comments() {
        let input = "// header\nf1\n# note\nkind: power\n\n% tail\n; more";
        assert_eq!(filter_comments(input), "f1\nkind: power");
    }

    #[test]
    fn test_document_with_leftovers_rejected() {
        let result = parse_document_complete("f1\nkind: power\n: 3");
        assert!(matches!(result, Err(CalculusError::TaskParse(_))));
        assert!(parse_document_complete("").is_err());
    }

    #[test]
    fn test_task_document_to_functions() {
        let input = "// (2x+1)^3 / 2
f1
kind: power a: 2 b: 1 n: 3 coeff: 1/2
g
kind: cos
a: 1 b: 30 variable: t
h
kind: sin coeff: -2
r
kind: power b: 2 n: -1
l
kind: ln a: 3 b: -1
";
        let functions = parse_task_document(input).unwrap();
        assert_eq!(functions.len(), 5);

        let (title, f1) = &functions[0];
        assert_eq!(title, "f1");
        assert_eq!(f1.kind_name(), "power");
        assert_eq!(
            f1.latex(),
            "\\frac{ 1 }{ 2 }( 2x + 1 )^{ 3 }"
        );
        // f1(1) = 27/2
        assert_eq!(
            f1.evaluate(&Fraction::one()).unwrap().constant_value(),
            Some(Fraction::new(27, 2).unwrap())
        );

        let (_, g) = &functions[1];
        assert_eq!(g.kind_name(), "cos");
        assert_eq!(g.latex(), "\\cos ( t + 30 )");
        // cos(30 + 30) = 1/2
        assert_eq!(
            g.evaluate(&Fraction::from(30)).unwrap().to_string(),
            "\\frac{ 1 }{ 2 }"
        );

        let (_, h) = &functions[2];
        assert_eq!(h.latex(), "-2\\sin x");

        let (_, r) = &functions[3];
        assert_eq!(r.integrate().unwrap().kind_name(), "ln");

        let (_, l) = &functions[4];
        assert_eq!(l.kind_name(), "ln");
        assert_eq!(l.coeff(), &Fraction::one());
    }

    #[test]
    fn test_bad_sections() {
        assert!(matches!(
            parse_task_document("f\na: 2"),
            Err(CalculusError::TaskParse(_))
        ));
        assert!(matches!(
            parse_task_document("f\nkind: tan"),
            Err(CalculusError::TaskParse(_))
        ));
        assert!(matches!(
            parse_task_document("f\nkind: power slope: 2"),
            Err(CalculusError::TaskParse(_))
        ));
        assert!(matches!(
            parse_task_document("f\nkind: power a: 1, 2"),
            Err(CalculusError::TaskParse(_))
        ));
        assert!(matches!(
            parse_task_document("f\nkind: power a: x"),
            Err(CalculusError::TaskParse(_))
        ));
        // a repeated key is not silently overwritten
        assert!(matches!(
            parse_task_document("f\nkind: power a: 1 a: 2"),
            Err(CalculusError::TaskParse(msg)) if msg.contains("'a' given more than once")
        ));
        // well-formed document, invalid function
        assert!(matches!(
            parse_task_document("f\nkind: cos a: 0"),
            Err(CalculusError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_parse_task_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# tasks").unwrap();
        writeln!(file, "p").unwrap();
        writeln!(file, "kind: power n: 2 coeff: 3").unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let functions = parse_task_file(&path).unwrap();
        assert_eq!(functions.len(), 1);
        assert_eq!(functions[0].1.differentiate().latex(), "6x");

        assert!(matches!(
            parse_task_file("/definitely/not/here.txt"),
            Err(CalculusError::TaskParse(_))
        ));
    }
}
