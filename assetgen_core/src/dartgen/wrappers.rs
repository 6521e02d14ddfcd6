//! Dart source of the helper classes referenced by file members.
//!
//! Templates use `@NAME@` markers that are filled from the [`SyntaxProfile`].

use super::resolver::WrapperClass;
use super::syntax::{AssetFlavors, SvgTint, SyntaxProfile};
use strum::IntoEnumIterator;

const IMAGE_TEMPLATE: &str = r#"@MODIFIER@ AssetGenImage {
@CTOR@

  final String _assetName;
@FLAVORS@
  Image image({
    Key? key,
    AssetBundle? bundle,
    ImageFrameBuilder? frameBuilder,
    ImageErrorWidgetBuilder? errorBuilder,
    String? semanticLabel,
    bool excludeFromSemantics = false,
    double? scale,
    double? width,
    double? height,
    Color? color,
    Animation<double>? opacity,
    BlendMode? colorBlendMode,
    BoxFit? fit,
    AlignmentGeometry alignment = Alignment.center,
    ImageRepeat repeat = ImageRepeat.noRepeat,
    Rect? centerSlice,
    bool matchTextDirection = false,
    bool gaplessPlayback = false,
    bool isAntiAlias = false,
    String? package,
    FilterQuality filterQuality = @FILTER_QUALITY@,
    int? cacheWidth,
    int? cacheHeight,
  }) {
    return Image.asset(
      _assetName,
      key: key,
      bundle: bundle,
      frameBuilder: frameBuilder,
      errorBuilder: errorBuilder,
      semanticLabel: semanticLabel,
      excludeFromSemantics: excludeFromSemantics,
      scale: scale,
      width: width,
      height: height,
      color: color,
      opacity: opacity,
      colorBlendMode: colorBlendMode,
      fit: fit,
      alignment: alignment,
      repeat: repeat,
      centerSlice: centerSlice,
      matchTextDirection: matchTextDirection,
      gaplessPlayback: gaplessPlayback,
      isAntiAlias: isAntiAlias,
      package: package,
      filterQuality: filterQuality,
      cacheWidth: cacheWidth,
      cacheHeight: cacheHeight,
    );
  }

  ImageProvider provider({AssetBundle? bundle, String? package}) {
    return AssetImage(_assetName, bundle: bundle, package: package);
  }

  String get path => _assetName;

  String get keyName => _assetName;
}
"#;

const SVG_TEMPLATE: &str = r#"@MODIFIER@ SvgGenImage {
@CTOR@

  final String _assetName;
@FLAVORS@
  SvgPicture svg({
    Key? key,
    bool matchTextDirection = false,
    AssetBundle? bundle,
    String? package,
    double? width,
    double? height,
    BoxFit fit = BoxFit.contain,
    AlignmentGeometry alignment = Alignment.center,
    bool allowDrawingOutsideViewBox = false,
    WidgetBuilder? placeholderBuilder,
    String? semanticsLabel,
    bool excludeFromSemantics = false,
    @TINT_PARAM@,
    Clip clipBehavior = Clip.hardEdge,
  }) {
    return SvgPicture.asset(
      _assetName,
      key: key,
      matchTextDirection: matchTextDirection,
      bundle: bundle,
      package: package,
      width: width,
      height: height,
      fit: fit,
      alignment: alignment,
      allowDrawingOutsideViewBox: allowDrawingOutsideViewBox,
      placeholderBuilder: placeholderBuilder,
      semanticsLabel: semanticsLabel,
      excludeFromSemantics: excludeFromSemantics,
      @TINT_ARG@,
      clipBehavior: clipBehavior,
    );
  }

  String get path => _assetName;

  String get keyName => _assetName;
}
"#;

const LOTTIE_TEMPLATE: &str = r#"@MODIFIER@ LottieGenImage {
@CTOR@

  final String _assetName;
@FLAVORS@
  LottieBuilder lottie({
    Animation<double>? controller,
    bool? animate,
    FrameRate? frameRate,
    bool? repeat,
    bool? reverse,
    void Function(LottieComposition)? onLoaded,
    AssetBundle? bundle,
    Key? key,
    double? width,
    double? height,
    BoxFit? fit,
    AlignmentGeometry? alignment,
    String? package,
  }) {
    return Lottie.asset(
      _assetName,
      controller: controller,
      animate: animate,
      frameRate: frameRate,
      repeat: repeat,
      reverse: reverse,
      onLoaded: onLoaded,
      bundle: bundle,
      key: key,
      width: width,
      height: height,
      fit: fit,
      alignment: alignment,
      package: package,
    );
  }

  String get path => _assetName;

  String get keyName => _assetName;
}
"#;

const RIVE_TEMPLATE: &str = r#"@MODIFIER@ RiveGenImage {
@CTOR@

  final String _assetName;
@FLAVORS@
  RiveAnimation rive({
    String? artboard,
    List<String> animations = const [],
    List<String> stateMachines = const [],
    BoxFit? fit,
    Alignment? alignment,
    Widget? placeHolder,
    bool antialiasing = true,
    void Function(Artboard)? onInit,
  }) {
    return RiveAnimation.asset(
      _assetName,
      artboard: artboard,
      animations: animations,
      stateMachines: stateMachines,
      fit: fit,
      alignment: alignment,
      placeHolder: placeHolder,
      antialiasing: antialiasing,
      onInit: onInit,
    );
  }

  String get path => _assetName;

  String get keyName => _assetName;
}
"#;

/// SDK and package types the generated file refers to. A generated class
/// with one of these names would shadow it.
pub const REFERENCED_TYPES: &[&str] = &[
    "Alignment",
    "AlignmentGeometry",
    "Animation",
    "Artboard",
    "AssetBundle",
    "AssetImage",
    "BlendMode",
    "BoxFit",
    "Clip",
    "Color",
    "ColorFilter",
    "FilterQuality",
    "FrameRate",
    "Function",
    "Image",
    "ImageErrorWidgetBuilder",
    "ImageFrameBuilder",
    "ImageProvider",
    "ImageRepeat",
    "Key",
    "List",
    "LottieBuilder",
    "LottieComposition",
    "Rect",
    "RiveAnimation",
    "Set",
    "String",
    "SvgPicture",
    "Widget",
    "WidgetBuilder",
    // dart:core names every library sees
    "Object",
    "Map",
    "Future",
    "Type",
    "Null",
    "Never",
    "bool",
    "double",
    "int",
    "num",
    "dynamic",
];

/// Whether `name` belongs to a helper class or a type the output refers to.
pub fn is_referenced_type(name: &str) -> bool {
    REFERENCED_TYPES.contains(&name) || WrapperClass::iter().any(|w| w.class_name() == name)
}

/// Full definition of `wrapper` for the given profile.
pub fn render_wrapper(wrapper: WrapperClass, profile: &SyntaxProfile) -> String {
    let template = match wrapper {
        WrapperClass::Image => IMAGE_TEMPLATE,
        WrapperClass::Svg => SVG_TEMPLATE,
        WrapperClass::Lottie => LOTTIE_TEMPLATE,
        WrapperClass::Rive => RIVE_TEMPLATE,
    };
    let name = wrapper.class_name();

    let (ctor, flavors_field) = match profile.flavors {
        AssetFlavors::Supported => (
            format!("  const {name}(this._assetName, {{this.flavors = const {{}}}});"),
            "  final Set<String> flavors;\n",
        ),
        AssetFlavors::Unsupported => (format!("  const {name}(this._assetName);"), ""),
    };
    let (tint_param, tint_arg) = match profile.svg_tint {
        SvgTint::ColorFilter => ("ColorFilter? colorFilter", "colorFilter: colorFilter"),
        SvgTint::Color => ("Color? color", "color: color"),
    };

    template
        .replace("@MODIFIER@", profile.class_modifier.keyword())
        .replace("@CTOR@", &ctor)
        .replace("@FLAVORS@\n", flavors_field)
        .replace("@FILTER_QUALITY@", profile.filter_quality.dart())
        .replace("@TINT_PARAM@", tint_param)
        .replace("@TINT_ARG@", tint_arg)
}
