use bytes::Bytes;

/// Renders the page served on every successful request.
///
/// The handler treats the result as an opaque byte payload; only its
/// exact length matters for framing.
pub fn hello_page() -> Bytes {
    let html = format!(
        r#"<!doctype html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport"
          content="width=device-width, user-scalable=no, initial-scale=1.0, maximum-scale=1.0, minimum-scale=1.0">
    <meta http-equiv="X-UA-Compatible" content="ie=edge">
    <title>Document</title>
</head>
<body>
    <h1>Hello from hearth {}</h1>
</body>
</html>"#,
        env!("CARGO_PKG_VERSION")
    );

    Bytes::from(html)
}
